use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context attached to configuration and validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Option or config key that caused the error (e.g., "voice.region", "app.appId")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending value)
    pub details: Option<String>,
    /// Component that raised the error (e.g., "microsoft", "config")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
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

/// Unified error type for the UnSpeech SDK.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Unsupported backend: '{backend}'")]
    UnsupportedBackend { backend: String },

    #[error("Capability '{0}' is not provided by this provider")]
    UnsupportedCapability(&'static str),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Remote error: HTTP {status}{}: {message}", format_code(.code))]
    Remote {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

fn format_code(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default()
}

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

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn unsupported_backend(backend: impl Into<String>) -> Self {
        Error::UnsupportedBackend {
            backend: backend.into(),
        }
    }

    /// A required field was missing or empty.
    pub fn missing_field(field: &str, source: &str) -> Self {
        Self::configuration_with_context(
            format!("'{}' is required", field),
            ErrorContext::new()
                .with_field_path(field)
                .with_source(source),
        )
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// HTTP status reported by the gateway, if the error came from it.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display_includes_context() {
        let err = Error::missing_field("region", "microsoft");
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error: 'region' is required"));
        assert!(msg.contains("field: region"));
        assert!(msg.contains("source: microsoft"));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("region")
        );
    }

    #[test]
    fn test_remote_error_display() {
        let err = Error::Remote {
            status: 400,
            code: Some("INVALID_ARGUMENT".into()),
            message: "provider is required".into(),
        };
        assert_eq!(
            err.to_string(),
            "Remote error: HTTP 400 (INVALID_ARGUMENT): provider is required"
        );
        assert_eq!(err.status(), Some(400));

        let bare = Error::Remote {
            status: 502,
            code: None,
            message: "bad gateway".into(),
        };
        assert_eq!(bare.to_string(), "Remote error: HTTP 502: bad gateway");
    }

    #[test]
    fn test_unsupported_backend_display() {
        assert_eq!(
            Error::unsupported_backend("Microsoft").to_string(),
            "Unsupported backend: 'Microsoft'"
        );
    }
}
