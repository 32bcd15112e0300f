//! HTTP response type.

use std::collections::HashMap;

/// An HTTP response from the Tebex API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. Empty bodies are represented as `{}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the server's `error_message`, if the body carries one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
    }

    /// Builds the message reported for a failed response.
    ///
    /// Uses `error_message` verbatim; otherwise the raw body kept for
    /// non-JSON answers; otherwise a generic status line.
    #[must_use]
    pub fn failure_message(&self) -> String {
        if let Some(message) = self.error_message() {
            return message.to_string();
        }
        if let Some(raw) = self.body.get("raw_body").and_then(serde_json::Value::as_str) {
            return raw.to_string();
        }
        format!("Request failed with status {}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        for code in [200, 201, 204] {
            assert!(HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
        for code in [301, 403, 404, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_failure_message_prefers_error_message() {
        let response = HttpResponse::new(
            403,
            HashMap::new(),
            json!({"error_code": 403, "error_message": "Invalid secret"}),
        );
        assert_eq!(response.error_message(), Some("Invalid secret"));
        assert_eq!(response.failure_message(), "Invalid secret");
    }

    #[test]
    fn test_failure_message_falls_back_to_raw_body() {
        let response = HttpResponse::new(502, HashMap::new(), json!({"raw_body": "Bad Gateway"}));
        assert_eq!(response.failure_message(), "Bad Gateway");
    }

    #[test]
    fn test_failure_message_falls_back_to_status() {
        let response = HttpResponse::new(404, HashMap::new(), json!({}));
        assert_eq!(response.failure_message(), "Request failed with status 404");
    }

    #[test]
    fn test_request_id_header() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("req-1"));
    }
}
