use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key that caused the error (e.g., "config.url", "gateway_header.name")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder", "env")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the recognition client.
///
/// `Api` is the only error this crate raises on its own during a call. Transport
/// and codec failures are passed through as they come from `reqwest` and `serde_json`.
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with a status other than 200. `body` is the raw response text.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub(crate) fn api(status: u16, body: String) -> Self {
        Error::Api { status, body }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Raw response body of an API error. Its structure is not guaranteed.
    pub fn api_body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_body_verbatim() {
        let body = r#"{"error":{"message":"Invalid encoding"}}"#.to_string();
        let err = Error::api(400, body.clone());
        assert!(err.is_api());
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.api_body(), Some(body.as_str()));
        assert!(err.to_string().contains("HTTP 400"));
    }

    #[test]
    fn configuration_error_formats_context() {
        let err = Error::configuration_with_context(
            "API key required",
            ErrorContext::new()
                .with_field_path("config.api_key")
                .with_source("client_builder"),
        );
        assert!(!err.is_api());
        assert_eq!(err.api_body(), None);
        assert_eq!(
            err.to_string(),
            "Configuration error: API key required (field: config.api_key, source: client_builder)"
        );
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("config.api_key")
        );
    }

    #[test]
    fn configuration_error_without_context() {
        let err = Error::configuration("bad");
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
