//! # cloud-speech-rest
//!
//! Typed client for the `speech:recognize` REST endpoint.
//!
//! ## Overview
//!
//! A request describes the audio (base64, passed through untouched) and the
//! recognition options. The client serializes it to camelCase JSON, POSTs it to
//! `<url>?key=<api key>` (plus an optional static gateway header) and parses the
//! response on HTTP 200. Any other status yields [`Error::Api`] carrying the raw
//! response body.
//!
//! There is no retry, caching or streaming: one call is one HTTP exchange.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloud_speech_rest::types::{AudioEncoding, RecognitionAudio, RecognitionConfig, RecognizeRequest};
//! use cloud_speech_rest::{ClientConfig, RecognizeClient};
//!
//! #[tokio::main]
//! async fn main() -> cloud_speech_rest::Result<()> {
//!     let client = RecognizeClient::new(
//!         ClientConfig::new("https://speech.googleapis.com/v1/speech:recognize", "api-key")
//!             .with_gateway_header("X-Gateway-Key", "gateway-secret"),
//!     )?;
//!
//!     let request = RecognizeRequest::new(
//!         RecognitionConfig::new("en-US")
//!             .with_encoding(AudioEncoding::Linear16)
//!             .with_sample_rate_hertz(16000),
//!         RecognitionAudio::from_base64("UklGRiQAAABXQVZF"),
//!     );
//!
//!     let response = client.recognize(&request).await?;
//!     println!("{}", response.transcript());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Request/response model and string enumerations |
//! | [`client`] | Async and blocking clients, configuration, builder |
//! | [`transport`] | HTTP client construction and request target |

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ClientConfig, GatewayHeader, RecognizeClient, RecognizeClientBuilder};
#[cfg(feature = "blocking")]
pub use client::BlockingRecognizeClient;
pub use error::{Error, ErrorContext};
pub use transport::TransportOptions;
pub use types::{
    AudioEncoding, RecognitionAudio, RecognitionConfig, RecognitionModel, RecognizeRequest,
    RecognizeResponse, SpeechContext, SpeechRecognitionAlternative, SpeechRecognitionResults,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
