use crate::transport::TransportOptions;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;

use super::config::{ClientConfig, GatewayHeader};
use super::core::RecognizeClient;

/// Builder for [`RecognizeClient`].
///
/// URL and API key are required. Everything else is off unless set.
#[derive(Default)]
pub struct RecognizeClientBuilder {
    url: Option<String>,
    api_key: Option<String>,
    gateway_header: Option<GatewayHeader>,
    timeout: Option<Duration>,
    proxy: Option<String>,
}

impl RecognizeClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.url = Some(config.url);
        self.api_key = Some(config.api_key);
        self.gateway_header = config.gateway_header;
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn gateway_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.gateway_header = Some(GatewayHeader::new(name, value));
        self
    }

    /// Whole-request timeout of the HTTP client. Unset means none.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    fn into_parts(self) -> Result<(ClientConfig, TransportOptions)> {
        let url = self
            .url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "Endpoint URL must be specified",
                    ErrorContext::new()
                        .with_field_path("config.url")
                        .with_source("client_builder"),
                )
            })?;
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new()
                        .with_field_path("config.api_key")
                        .with_source("client_builder"),
                )
            })?;
        let config = ClientConfig {
            url,
            api_key,
            gateway_header: self.gateway_header,
        };
        let options = TransportOptions {
            timeout: self.timeout,
            proxy: self.proxy,
        };
        Ok((config, options))
    }

    pub fn build(self) -> Result<RecognizeClient> {
        let (config, options) = self.into_parts()?;
        RecognizeClient::with_options(config, options)
    }

    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<super::blocking::BlockingRecognizeClient> {
        let (config, options) = self.into_parts()?;
        super::blocking::BlockingRecognizeClient::with_options(config, options)
    }
}
