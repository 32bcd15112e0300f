//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: non-2xx responses from the API
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for everything above plus transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use tebex_api::clients::HttpError;
//!
//! match http_client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status code.
///
/// `message` is the `error_message` field of the response body, verbatim.
///
/// # Example
///
/// ```rust
/// use tebex_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 403,
///     message: "Invalid secret".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Invalid secret");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The server-provided error message.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A form body was not a flat object of scalar values.
    #[error("Form bodies must be a JSON object of scalar values.")]
    InvalidFormBody,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API rejected the request (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response carried a body that is not JSON.
    #[error("Invalid JSON in response with status {code}: {source}")]
    InvalidResponse {
        /// The HTTP status code of the response.
        code: u16,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_server_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Package not found".to_string(),
        };
        assert_eq!(error.to_string(), "Package not found");
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_http_error_wraps_response_transparently() {
        let error = HttpError::from(HttpResponseError {
            code: 422,
            message: "Invalid ban".to_string(),
        });
        assert_eq!(error.to_string(), "Invalid ban");
    }
}
