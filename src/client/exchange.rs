//! Payload handling shared by the async and blocking clients.

use crate::types::{RecognizeRequest, RecognizeResponse};
use crate::{Error, Result};
use tracing::{debug, warn};

const STATUS_OK: u16 = 200;

pub(crate) fn encode_request(request: &RecognizeRequest) -> Result<String> {
    Ok(serde_json::to_string(request)?)
}

/// Only an exact 200 is parsed; every other status becomes an API error
/// carrying the body untouched.
pub(crate) fn decode_response(status: u16, body: String) -> Result<RecognizeResponse> {
    debug!(status, body_len = body.len(), "recognize response received");
    if status != STATUS_OK {
        warn!(status, "recognize request rejected by service");
        return Err(Error::api(status, body));
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecognitionAudio, RecognitionConfig};

    #[test]
    fn encodes_camel_case_without_unset_fields() {
        let request = RecognizeRequest::new(
            RecognitionConfig::new("en-US").with_sample_rate_hertz(8000),
            RecognitionAudio::from_base64("AAAA"),
        );
        let body = encode_request(&request).unwrap();
        assert_eq!(
            body,
            r#"{"config":{"sampleRateHertz":8000,"languageCode":"en-US"},"audio":{"content":"AAAA"}}"#
        );
    }

    #[test]
    fn non_200_success_codes_are_still_errors() {
        let err = decode_response(204, String::new()).unwrap_err();
        assert_eq!(err.status(), Some(204));
        assert_eq!(err.api_body(), Some(""));
    }

    #[test]
    fn error_body_is_not_interpreted() {
        let body = r#"{"error":{"code":400,"message":"Invalid encoding","status":"INVALID_ARGUMENT"}}"#;
        let err = decode_response(400, body.to_string()).unwrap_err();
        assert_eq!(err.api_body(), Some(body));
    }

    #[test]
    fn malformed_ok_body_is_a_serialization_error() {
        let err = decode_response(200, "<html>gateway</html>".to_string()).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
