//! Recognition client.
//!
//! One call is one HTTP POST to `<url>?key=<api key>`, optionally carrying a
//! static gateway header. Implementation details are split into submodules under
//! `src/client/`.

pub mod builder;
pub mod config;
pub mod core;
mod exchange;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use builder::RecognizeClientBuilder;
pub use config::{ClientConfig, GatewayHeader};
pub use core::RecognizeClient;

#[cfg(feature = "blocking")]
pub use blocking::BlockingRecognizeClient;
