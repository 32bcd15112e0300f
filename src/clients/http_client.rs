//! HTTP client for Tebex API communication.
//!
//! [`HttpClient`] attaches the `X-Tebex-Secret` header to every request and
//! turns non-2xx answers into [`HttpResponseError`]s.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::TebexConfig;

/// Header carrying the server secret.
pub const SECRET_HEADER: &str = "X-Tebex-Secret";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Tebex Plugin API.
///
/// The client handles:
/// - Base URI from the configuration
/// - Default headers including User-Agent and the server secret
/// - Response parsing and `error_message` extraction
///
/// Each call to [`request`](Self::request) sends exactly one request; there
/// are no retries.
///
/// # Example
///
/// ```rust,ignore
/// use tebex_api::clients::{HttpClient, HttpMethod, HttpRequest};
/// use tebex_api::TebexConfig;
///
/// let config = TebexConfig::with_secret("my-secret")?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/listing").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://plugin.tebex.io`).
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialised.
    pub fn new(config: &TebexConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Tebex API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            SECRET_HEADER.to_string(),
            config.secret().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.base_url().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the underlying transport, without the default headers.
    ///
    /// Used for requests to hosts other than the API, which must never see
    /// the secret.
    pub(crate) const fn transport(&self) -> &reqwest::Client {
        &self.client
    }

    /// Sends an HTTP request to the Tebex API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs, including while reading the body (`Network`)
    /// - A 2xx response body is not valid JSON (`InvalidResponse`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match (&request.body, request.body_type) {
            (Some(_), Some(DataType::Form)) => {
                req_builder = req_builder.form(&request.form_pairs()?);
            }
            (Some(body), _) => {
                req_builder = req_builder.body(body.to_string());
            }
            (None, _) => {}
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending Tebex API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let success = (200..300).contains(&code);

        // Non-JSON bodies are kept raw only to build a failure message.
        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str::<serde_json::Value>(&body_text) {
                Ok(body) => body,
                Err(source) if success => {
                    tracing::debug!(
                        method = %request.http_method,
                        path = %request.path,
                        status = code,
                        "Tebex API returned a non-JSON body"
                    );
                    return Err(HttpError::InvalidResponse { code, source });
                }
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received Tebex API response"
        );

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.failure_message(),
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Secret};

    fn create_test_config() -> TebexConfig {
        TebexConfig::builder()
            .secret(Secret::new("test-secret").unwrap())
            .base_url(BaseUrl::new("http://localhost:9999/").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_configured_base_uri() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_uri(), "http://localhost:9999");
    }

    #[test]
    fn test_secret_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get(SECRET_HEADER),
            Some(&"test-secret".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Tebex API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = TebexConfig::builder()
            .secret(Secret::new("test-secret").unwrap())
            .user_agent_prefix("MyPlugin/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyPlugin/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }
}
