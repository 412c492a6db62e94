//! HTTP transport: client construction and the pieces of the outgoing request
//! that do not depend on the payload.

pub mod http;

pub(crate) use http::HttpTransport;
pub use http::TransportOptions;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
