//! # Client Errors
//!
//! This module defines the error types used throughout the client layer.
//! Configuration mistakes, forwarding failures and collaborator failures each
//! get their own enum so callers can match on exactly the layer that failed.

use serde_json::Value;

/// Errors raised while assembling a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Entry point not configured")]
    MissingEntryPoint,
    #[error("Entry point is empty")]
    EmptyEntryPoint,
    #[error("Invalid auth options: {0}")]
    InvalidAuth(String),
}

/// Errors reported by a [`Resource`](crate::Resource) or its factory.
///
/// The client never inspects these; they are handed back to the caller as
/// [`ClientError::Resource`].
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Resource request failed: {0}")]
    Failed(String),
    #[error("Unsupported auth type: {0}")]
    UnsupportedAuth(String),
    #[error("Resource error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors returned by [`HalClient`](crate::HalClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The entry resource does not respond to the requested method.
    #[error("undefined method `{method}` for entry point (args: {args:?})")]
    NoSuchMethod { method: String, args: Vec<Value> },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl ClientError {
    /// Name of the method that was not understood, if that is what failed.
    pub fn missing_method(&self) -> Option<&str> {
        match self {
            ClientError::NoSuchMethod { method, .. } => Some(method),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_such_method_names_method_and_args() {
        let err = ClientError::NoSuchMethod {
            method: "orders".to_string(),
            args: vec![json!(1), json!("x")],
        };
        let msg = err.to_string();
        assert!(msg.contains("`orders`"));
        assert!(msg.contains("Number(1)"));
        assert_eq!(err.missing_method(), Some("orders"));
    }

    #[test]
    fn config_error_converts_into_client_error() {
        let err: ClientError = ConfigError::MissingEntryPoint.into();
        assert!(matches!(err, ClientError::Config(ConfigError::MissingEntryPoint)));
        assert_eq!(err.to_string(), "Entry point not configured");
    }

    #[test]
    fn resource_error_is_transparent() {
        let err: ClientError = ResourceError::Failed("503".into()).into();
        assert_eq!(err.to_string(), "Resource request failed: 503");
        assert_eq!(err.missing_method(), None);
    }
}
