//! # Types Module
//!
//! Plain data mirroring the JSON schema of `speech:recognize`.
//!
//! Field names are camelCase on the wire. Optional request fields are `Option`s
//! and are omitted from the payload when unset; response fields that the service
//! may leave out deserialize to empty or zero values.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RecognizeRequest`] | Request body: config plus audio |
//! | [`RecognitionConfig`] | Recognition options |
//! | [`SpeechContext`] | Phrase hints |
//! | [`RecognitionAudio`] | Base64 audio payload |
//! | [`RecognizeResponse`] | Response body |
//! | [`AudioEncoding`] / [`RecognitionModel`] | Closed string enumerations |
//!
//! ## Example
//!
//! ```rust
//! use cloud_speech_rest::types::{
//!     AudioEncoding, RecognitionAudio, RecognitionConfig, RecognizeRequest, SpeechContext,
//! };
//!
//! let config = RecognitionConfig::new("de-AT")
//!     .with_encoding(AudioEncoding::Linear16)
//!     .with_sample_rate_hertz(16000)
//!     .with_speech_context(SpeechContext::new(["Railjet", "$MONTH"]));
//! let request = RecognizeRequest::new(config, RecognitionAudio::from_bytes(b"\x00\x01"));
//!
//! let json = serde_json::to_string(&request).unwrap();
//! assert!(json.contains("\"sampleRateHertz\":16000"));
//! assert!(!json.contains("maxAlternatives"));
//! ```

pub mod enums;
pub mod request;
pub mod response;

pub use enums::{AudioEncoding, ParseLiteralError, RecognitionModel};
pub use request::{RecognitionAudio, RecognitionConfig, RecognizeRequest, SpeechContext};
pub use response::{RecognizeResponse, SpeechRecognitionAlternative, SpeechRecognitionResults};
