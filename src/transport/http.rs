use crate::client::ClientConfig;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Proxy;
use std::fmt;
use std::time::Duration;
use url::Url;

use super::TransportError;

const KEY_PARAM: &str = "key";
const REDACTED: &str = "REDACTED";

/// Generic knobs of the underlying HTTP library. Nothing is set by default:
/// no timeout, no proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    pub timeout: Option<Duration>,
    pub proxy: Option<String>,
}

/// Everything about the outgoing request that is fixed for the client's lifetime.
#[derive(Clone)]
pub(crate) struct RequestTarget {
    url: Url,
    display_url: String,
    gateway_header: Option<(HeaderName, HeaderValue)>,
}

impl RequestTarget {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let url = endpoint_with_key(&config.url, &config.api_key)?;
        let display_url = redact_key(&url);

        let gateway_header = match &config.gateway_header {
            Some(header) => {
                let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|e| {
                    Error::configuration_with_context(
                        format!("Invalid gateway header name: {}", e),
                        ErrorContext::new()
                            .with_field_path("gateway_header.name")
                            .with_details(header.name.clone()),
                    )
                })?;
                let mut value = HeaderValue::from_str(&header.value).map_err(|e| {
                    Error::configuration_with_context(
                        format!("Invalid gateway header value: {}", e),
                        ErrorContext::new().with_field_path("gateway_header.value"),
                    )
                })?;
                value.set_sensitive(true);
                Some((name, value))
            }
            None => None,
        };

        Ok(Self {
            url,
            display_url,
            gateway_header,
        })
    }

    pub(crate) fn url(&self) -> &Url {
        &self.url
    }

    /// The target URL with the key value masked, safe for logs.
    pub(crate) fn display_url(&self) -> &str {
        &self.display_url
    }

    pub(crate) fn has_gateway_header(&self) -> bool {
        self.gateway_header.is_some()
    }
}

impl fmt::Debug for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestTarget")
            .field("url", &self.display_url)
            .field(
                "gateway_header",
                &self.gateway_header.as_ref().map(|(name, _)| name),
            )
            .finish()
    }
}

/// `<url>?key=<api_key>`. Other query parameters are kept in order; any `key`
/// already in the URL is replaced.
pub(crate) fn endpoint_with_key(base: &str, api_key: &str) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid endpoint URL: {}", e),
            ErrorContext::new()
                .with_field_path("config.url")
                .with_details(base.to_string()),
        )
    })?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| *k != KEY_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(KEY_PARAM, api_key);
    Ok(url)
}

fn redact_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == KEY_PARAM {
                REDACTED.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}

fn proxy_for(options: &TransportOptions) -> Result<Option<Proxy>> {
    match &options.proxy {
        Some(proxy_url) => Proxy::all(proxy_url).map(Some).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid proxy URL: {}", e),
                ErrorContext::new()
                    .with_field_path("transport.proxy")
                    .with_details(proxy_url.clone()),
            )
        }),
        None => Ok(None),
    }
}

/// Async transport: one JSON POST per call.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
    target: RequestTarget,
}

impl HttpTransport {
    pub(crate) fn new(config: &ClientConfig, options: &TransportOptions) -> Result<Self> {
        let target = RequestTarget::new(config)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = proxy_for(options)? {
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, target })
    }

    pub(crate) fn target(&self) -> &RequestTarget {
        &self.target
    }

    /// POST `body` as JSON and return the status with the full body text.
    pub(crate) async fn post_json(&self, body: String) -> Result<(u16, String)> {
        let mut request = self
            .client
            .post(self.target.url().clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some((name, value)) = &self.target.gateway_header {
            request = request.header(name.clone(), value.clone());
        }

        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(TransportError::Http)?;
        Ok((status, text))
    }
}

/// Blocking counterpart of [`HttpTransport`].
#[cfg(feature = "blocking")]
#[derive(Debug, Clone)]
pub(crate) struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
    target: RequestTarget,
}

#[cfg(feature = "blocking")]
impl BlockingHttpTransport {
    pub(crate) fn new(config: &ClientConfig, options: &TransportOptions) -> Result<Self> {
        let target = RequestTarget::new(config)?;

        // reqwest's blocking client defaults to a 30s timeout; keep it unset unless asked.
        let mut builder = reqwest::blocking::Client::builder().timeout(options.timeout);
        if let Some(proxy) = proxy_for(options)? {
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, target })
    }

    pub(crate) fn target(&self) -> &RequestTarget {
        &self.target
    }

    pub(crate) fn post_json(&self, body: String) -> Result<(u16, String)> {
        let mut request = self
            .client
            .post(self.target.url().clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some((name, value)) = &self.target.gateway_header {
            request = request.header(name.clone(), value.clone());
        }

        let response = request.send().map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let text = response.text().map_err(TransportError::Http)?;
        Ok((status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;

    #[test]
    fn key_is_appended_as_query_parameter() {
        let url = endpoint_with_key("https://speech.example.com/v1/speech:recognize", "abc").unwrap();
        assert_eq!(url.as_str(), "https://speech.example.com/v1/speech:recognize?key=abc");
    }

    #[test]
    fn existing_query_is_kept() {
        let url = endpoint_with_key("https://gw.example.com/recognize?region=eu", "abc").unwrap();
        assert_eq!(url.as_str(), "https://gw.example.com/recognize?region=eu&key=abc");
    }

    #[test]
    fn existing_key_is_replaced() {
        let url = endpoint_with_key("https://gw.example.com/r?key=old&region=eu&key=older", "new")
            .unwrap();
        let keys: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| *k == KEY_PARAM)
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(keys, vec!["new"]);
        assert_eq!(url.query(), Some("region=eu&key=new"));
    }

    #[test]
    fn key_is_percent_encoded() {
        let url = endpoint_with_key("https://gw.example.com/r", "a b&c").unwrap();
        assert_eq!(url.query(), Some("key=a+b%26c"));
        let (_, value) = url.query_pairs().next().unwrap();
        assert_eq!(value, "a b&c");
    }

    #[test]
    fn relative_url_is_a_configuration_error() {
        let err = endpoint_with_key("/v1/speech:recognize", "abc").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("config.url")
        );
    }

    #[test]
    fn display_url_hides_the_key() {
        let config = ClientConfig::new("https://gw.example.com/r?region=eu", "super-secret");
        let target = RequestTarget::new(&config).unwrap();
        assert!(!target.display_url().contains("super-secret"));
        assert!(target.display_url().contains("key=REDACTED"));
        assert!(target.display_url().contains("region=eu"));
        assert!(target.url().as_str().contains("key=super-secret"));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = ClientConfig::new("https://gw.example.com/r", "super-secret")
            .with_gateway_header("X-Gateway-Key", "gateway-secret");
        let transport = HttpTransport::new(&config, &TransportOptions::default()).unwrap();
        let shown = format!("{:?}", transport);
        assert!(!shown.contains("super-secret"));
        assert!(!shown.contains("gateway-secret"));
    }

    #[test]
    fn gateway_header_is_parsed_once() {
        let config = ClientConfig::new("https://gw.example.com/r", "k")
            .with_gateway_header("X-Gateway-Key", "g-123");
        let target = RequestTarget::new(&config).unwrap();
        assert!(target.has_gateway_header());
        let (name, value) = target.gateway_header.as_ref().unwrap();
        assert_eq!(name.as_str(), "x-gateway-key");
        assert_eq!(value.to_str().unwrap(), "g-123");
        assert!(value.is_sensitive());

        let plain = RequestTarget::new(&ClientConfig::new("https://gw.example.com/r", "k")).unwrap();
        assert!(!plain.has_gateway_header());
    }

    #[test]
    fn invalid_gateway_header_name_is_rejected() {
        let config = ClientConfig::new("https://gw.example.com/r", "k")
            .with_gateway_header("bad header", "v");
        let err = RequestTarget::new(&config).unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("gateway_header.name")
        );
    }

    #[test]
    fn invalid_gateway_header_value_is_rejected() {
        let config = ClientConfig::new("https://gw.example.com/r", "k")
            .with_gateway_header("X-Gateway-Key", "line\nbreak");
        let err = RequestTarget::new(&config).unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("gateway_header.value")
        );
    }

    #[test]
    fn bad_proxy_is_a_configuration_error() {
        let options = TransportOptions {
            timeout: None,
            proxy: Some("ftp://proxy.example.com:21".to_string()),
        };
        let err = proxy_for(&options).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(proxy_for(&TransportOptions::default()).unwrap().is_none());
    }
}
