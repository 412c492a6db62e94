//! Synchronous client for callers without an async runtime.
//!
//! Must not be constructed or called from inside a Tokio runtime; that is a
//! restriction of `reqwest::blocking`.

use crate::transport::http::BlockingHttpTransport;
use crate::transport::TransportOptions;
use crate::types::{RecognizeRequest, RecognizeResponse};
use crate::Result;
use tracing::debug;

use super::config::ClientConfig;
use super::exchange::{decode_response, encode_request};

#[derive(Debug, Clone)]
pub struct BlockingRecognizeClient {
    transport: BlockingHttpTransport,
}

impl BlockingRecognizeClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_options(config, TransportOptions::default())
    }

    pub fn with_options(config: ClientConfig, options: TransportOptions) -> Result<Self> {
        let transport = BlockingHttpTransport::new(&config, &options)?;
        Ok(Self { transport })
    }

    /// Same contract as [`RecognizeClient::recognize`](super::RecognizeClient::recognize).
    pub fn recognize(&self, request: &RecognizeRequest) -> Result<RecognizeResponse> {
        let body = encode_request(request)?;
        let target = self.transport.target();
        debug!(
            url = %target.display_url(),
            body_len = body.len(),
            gateway_header = target.has_gateway_header(),
            "sending recognize request"
        );
        let (status, text) = self.transport.post_json(body)?;
        decode_response(status, text)
    }
}
