//! Error types for the relay library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong inside the relay.
///
/// Parsing and formatting meal plans never produce errors; everything here
/// originates at a boundary (the completion endpoint, the conversation store,
/// configuration or user input).
#[derive(Error, Debug)]
pub enum RelayError {
    /// The completion gateway failed (network, auth, quota)
    #[error("Provider error: {message}")]
    Provider {
        message: String,
        status: Option<u16>,
    },
    /// Conversation store read or write failure
    #[error("Store error: {message}")]
    Store { message: String },
    /// An outbound message could not be delivered
    #[error("Delivery error: {message}")]
    Delivery { message: String },
    /// A reply file could not be read
    #[error("Cannot read '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A builder or command argument was rejected
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// JSON encoding or decoding failed
    #[error("JSON error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Bad settings, such as a malformed allow-list
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating provider errors with an optional HTTP status.
pub struct ProviderErrorBuilder {
    message: String,
}

impl ProviderErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error carrying the HTTP status returned by the endpoint.
    pub fn with_status(self, status: u16) -> RelayError {
        RelayError::Provider {
            message: self.message,
            status: Some(status),
        }
    }

    /// Build the error without a status (transport failure, bad payload).
    pub fn build(self) -> RelayError {
        RelayError::Provider {
            message: self.message,
            status: None,
        }
    }
}

/// Names the rejected field; finished by [`with_reason`](Self::with_reason).
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Finishes the error.
    pub fn with_reason(self, reason: impl Into<String>) -> RelayError {
        RelayError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RelayError {
    /// Starts a `Provider` error.
    pub fn provider(message: impl Into<String>) -> ProviderErrorBuilder {
        ProviderErrorBuilder::new(message)
    }

    /// Starts an `InvalidInput` error for `field`.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true when the error came from the completion gateway.
    pub fn is_provider(&self) -> bool {
        matches!(self, RelayError::Provider { .. })
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        let builder = RelayError::provider(format!("Request failed: {e}"));
        match e.status() {
            Some(status) => builder.with_status(status.as_u16()),
            None => builder.build(),
        }
    }
}

/// Turns foreign errors into `RelayError::Configuration` with a label.
pub trait ResultExt<T, E> {
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| RelayError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_builder_with_status() {
        let err = RelayError::provider("quota exceeded").with_status(429);
        assert!(err.is_provider());
        assert_eq!(err.to_string(), "Provider error: quota exceeded");
        match err {
            RelayError::Provider { status, .. } => assert_eq!(status, Some(429)),
            _ => panic!("expected provider error"),
        }
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = RelayError::invalid_input("servings").with_reason("must be positive");
        assert!(!err.is_provider());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'servings': must be positive"
        );
    }

    #[test]
    fn test_with_context() {
        let parsed: std::result::Result<u32, _> = "abc".parse::<u32>();
        let err = parsed.with_context("allowed user id").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: allowed user id:"));
    }
}
