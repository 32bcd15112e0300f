//! Error types for the Tebex API client.
//!
//! This module contains the configuration, validation and top-level error
//! types. HTTP-level errors live in [`crate::clients`] and are wrapped by
//! [`TebexError::Http`].
//!
//! # Error Handling
//!
//! Every public operation returns `Result<T, TebexError>`. Arguments are
//! checked before anything is sent, so a [`TebexError::Validation`] always
//! means no request reached the network.
//!
//! # Example
//!
//! ```rust
//! use tebex_api::{ConfigError, Secret};
//!
//! let result = Secret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySecret)));
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The secret cannot be empty.
    #[error("Secret cannot be empty. Please provide a valid Tebex server secret key.")]
    EmptySecret,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://plugin.tebex.io').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// A required argument was missing, empty or not one of the accepted values.
///
/// Raised locally, before any request is built.
///
/// # Example
///
/// ```rust
/// use tebex_api::ValidationError;
///
/// let error = ValidationError::missing("player_id", "No player ID to get commands");
/// assert_eq!(error.argument, "player_id");
/// assert_eq!(error.to_string(), "No player ID to get commands");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the offending argument.
    pub argument: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    /// Creates an error for a missing or empty argument.
    #[must_use]
    pub fn missing(argument: &'static str, message: impl Into<String>) -> Self {
        Self {
            argument,
            message: message.into(),
        }
    }

    /// Creates an error for a value outside a closed set.
    #[must_use]
    pub fn unrecognized(argument: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            argument,
            message: format!(
                "Unrecognized {argument} '{value}'. Expected one of: {}",
                expected.join(", ")
            ),
        }
    }
}

/// Top-level error returned by every [`TebexClient`](crate::TebexClient) operation.
///
/// # Example
///
/// ```rust,ignore
/// use tebex_api::{TebexClient, TebexError};
///
/// match client.due_online_commands("").await {
///     Err(TebexError::Validation(e)) => println!("bad argument {}: {e}", e.argument),
///     Err(e) if e.api_error().is_some() => println!("server said: {e}"),
///     Err(e) => println!("other failure: {e}"),
///     Ok(commands) => println!("{commands}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum TebexError {
    /// An argument failed local validation. No request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request failed at the HTTP layer.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The initial information lookup failed while constructing the client.
    #[error("Invalid secret key")]
    InvalidSecret {
        /// The failure of the information lookup.
        #[source]
        source: Box<TebexError>,
    },
}

impl TebexError {
    /// Returns `true` if this is a local validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the server response error, if the API rejected the request.
    #[must_use]
    pub const fn api_error(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_error_message() {
        let message = ConfigError::EmptySecret.to_string();
        assert!(message.contains("Secret cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "secret" };
        let message = error.to_string();
        assert!(message.contains("secret"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_unrecognized_value_lists_expected_values() {
        let error = ValidationError::unrecognized("status", "lost", &["complete", "refund"]);
        assert_eq!(error.argument, "status");
        assert!(error.to_string().contains("'lost'"));
        assert!(error.to_string().contains("complete, refund"));
    }

    #[test]
    fn test_api_error_accessor() {
        let error = TebexError::Http(HttpError::Response(HttpResponseError {
            code: 403,
            message: "Invalid secret".to_string(),
        }));
        assert_eq!(error.api_error().map(|e| e.code), Some(403));
        assert_eq!(error.to_string(), "Invalid secret");
        assert!(!error.is_validation());
    }

    #[test]
    fn test_invalid_secret_keeps_source() {
        let inner = TebexError::Validation(ValidationError::missing("x", "inner"));
        let error = TebexError::InvalidSecret {
            source: Box::new(inner),
        };
        assert_eq!(error.to_string(), "Invalid secret key");
        let source = std::error::Error::source(&error).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("inner"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySecret;
        let _: &dyn std::error::Error = &error;
    }
}
