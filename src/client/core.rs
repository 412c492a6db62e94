use crate::transport::{HttpTransport, TransportOptions};
use crate::types::{RecognizeRequest, RecognizeResponse};
use crate::Result;
use tracing::debug;

use super::builder::RecognizeClientBuilder;
use super::config::ClientConfig;
use super::exchange::{decode_response, encode_request};

/// Async client for `speech:recognize`.
///
/// Holds no per-call state; share it freely (it is cheap to clone) and issue
/// calls concurrently.
#[derive(Debug, Clone)]
pub struct RecognizeClient {
    transport: HttpTransport,
}

impl RecognizeClient {
    pub fn builder() -> RecognizeClientBuilder {
        RecognizeClientBuilder::new()
    }

    /// Client with default transport options.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_options(config, TransportOptions::default())
    }

    pub fn with_options(config: ClientConfig, options: TransportOptions) -> Result<Self> {
        let transport = HttpTransport::new(&config, &options)?;
        Ok(Self { transport })
    }

    /// Run one recognition exchange: a single POST, no retries.
    ///
    /// Returns [`Error::Api`](crate::Error::Api) with the raw body for any status
    /// other than 200. Transport and JSON failures are returned as they occur.
    pub async fn recognize(&self, request: &RecognizeRequest) -> Result<RecognizeResponse> {
        let body = encode_request(request)?;
        let target = self.transport.target();
        debug!(
            url = %target.display_url(),
            body_len = body.len(),
            gateway_header = target.has_gateway_header(),
            "sending recognize request"
        );
        let (status, text) = self.transport.post_json(body).await?;
        decode_response(status, text)
    }
}
