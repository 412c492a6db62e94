//! Client configuration: endpoint, API key and the optional gateway header.

use crate::{Error, ErrorContext, Result};
use std::fmt;

/// Public REST endpoint used when `SPEECH_API_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://speech.googleapis.com/v1/speech:recognize";

pub const ENV_URL: &str = "SPEECH_API_URL";
pub const ENV_API_KEY: &str = "SPEECH_API_KEY";
pub const ENV_GATEWAY_HEADER_NAME: &str = "SPEECH_GATEWAY_HEADER_NAME";
pub const ENV_GATEWAY_HEADER_VALUE: &str = "SPEECH_GATEWAY_HEADER_VALUE";

/// Static header some API gateways in front of the service require, sent on
/// every request in addition to the `key` query parameter.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayHeader {
    pub name: String,
    pub value: String,
}

impl GatewayHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for GatewayHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayHeader")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Covers both deployments: API key only, or API key plus a gateway header.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    pub api_key: String,
    pub gateway_header: Option<GatewayHeader>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            gateway_header: None,
        }
    }

    pub fn with_gateway_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.gateway_header = Some(GatewayHeader::new(name, value));
        self
    }

    /// Load from `SPEECH_API_URL`, `SPEECH_API_KEY` and, optionally, the pair
    /// `SPEECH_GATEWAY_HEADER_NAME` / `SPEECH_GATEWAY_HEADER_VALUE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = non_empty(ENV_URL).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let api_key = non_empty(ENV_API_KEY).ok_or_else(|| {
            Error::configuration_with_context(
                "API key required",
                ErrorContext::new()
                    .with_field_path(ENV_API_KEY)
                    .with_source("env"),
            )
        })?;

        let gateway_header = match (
            non_empty(ENV_GATEWAY_HEADER_NAME),
            lookup(ENV_GATEWAY_HEADER_VALUE),
        ) {
            (Some(name), Some(value)) => Some(GatewayHeader::new(name, value)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(Error::configuration_with_context(
                    "Gateway header name set without a value",
                    ErrorContext::new()
                        .with_field_path(ENV_GATEWAY_HEADER_VALUE)
                        .with_source("env"),
                ))
            }
            (None, Some(_)) => {
                return Err(Error::configuration_with_context(
                    "Gateway header value set without a name",
                    ErrorContext::new()
                        .with_field_path(ENV_GATEWAY_HEADER_NAME)
                        .with_source("env"),
                ))
            }
        };

        Ok(Self {
            url,
            api_key,
            gateway_header,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("gateway_header", &self.gateway_header)
            .finish()
    }
}
