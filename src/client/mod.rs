//! The Tebex Plugin API client.
//!
//! [`TebexClient`] validates its secret on construction by fetching the
//! account information, then exposes one async method per endpoint. Each
//! method checks its arguments, sends exactly one request and returns the
//! decoded JSON body or a confirmation message.
//!
//! Operations are grouped by resource:
//!
//! - information and listing: [`TebexClient::information`], [`TebexClient::listing`]
//! - command queue: [`TebexClient::due_commands`] and friends
//! - packages and community goals
//! - payments and checkout
//! - gift cards, coupons, bans, sales
//! - player lookup and customer purchases

mod coupons;
mod gift_cards;
mod information;
mod packages;
mod payments;
mod players;
mod queue;

pub use information::AccountInformation;
pub use payments::DEFAULT_PAYMENT_LIMIT;

use serde::Serialize;
use tokio::sync::OnceCell;

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::TebexConfig;
use crate::error::{TebexError, ValidationError};

/// Async client for the Tebex Plugin API.
///
/// # Thread Safety
///
/// `TebexClient` is `Send + Sync`. The account information is cached in a
/// write-once cell filled during construction, so it can be read from any
/// task without further requests.
///
/// # Example
///
/// ```rust,ignore
/// use tebex_api::TebexClient;
///
/// let client = TebexClient::new("my-secret").await?;
/// println!("Store: {:?}", client.information().await?.domain());
///
/// let commands = client.due_offline_commands().await?;
/// ```
#[derive(Debug)]
pub struct TebexClient {
    http_client: HttpClient,
    config: TebexConfig,
    information: OnceCell<AccountInformation>,
}

// Verify TebexClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TebexClient>();
};

impl TebexClient {
    /// Creates a client for the production API and validates the secret.
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Config`] if the secret is empty and
    /// [`TebexError::InvalidSecret`] if the information lookup fails.
    pub async fn new(secret: impl Into<String>) -> Result<Self, TebexError> {
        Self::with_config(TebexConfig::with_secret(secret)?).await
    }

    /// Creates a client from an explicit configuration and validates the secret.
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::InvalidSecret`] if the information lookup fails
    /// for any reason, with the underlying failure as its source.
    pub async fn with_config(config: TebexConfig) -> Result<Self, TebexError> {
        let http_client = HttpClient::new(&config)?;
        let client = Self {
            http_client,
            config,
            information: OnceCell::new(),
        };

        if let Err(error) = client.information().await {
            tracing::warn!(%error, "Tebex rejected the configured secret");
            return Err(TebexError::InvalidSecret {
                source: Box::new(error),
            });
        }

        Ok(client)
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &TebexConfig {
        &self.config
    }

    /// Sends a bodiless request and returns the decoded body.
    async fn get(
        &self,
        path: String,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, TebexError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        for (key, value) in query {
            builder = builder.query_param(*key, value.clone());
        }
        let request = builder.build().map_err(HttpError::from)?;
        Ok(self.send(request).await?.body)
    }

    /// Sends a bodiless DELETE request.
    async fn delete(&self, path: String) -> Result<HttpResponse, TebexError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .build()
            .map_err(HttpError::from)?;
        self.send(request).await
    }

    /// Sends a request whose body is JSON.
    async fn send_json(
        &self,
        method: HttpMethod,
        path: String,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TebexError> {
        let request = HttpRequest::builder(method, path)
            .body(body)
            .body_type(DataType::Json)
            .build()
            .map_err(HttpError::from)?;
        self.send(request).await
    }

    /// Sends a request whose body is a URL-encoded form.
    async fn send_form(
        &self,
        method: HttpMethod,
        path: String,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TebexError> {
        let request = HttpRequest::builder(method, path)
            .body(body)
            .body_type(DataType::Form)
            .build()
            .map_err(HttpError::from)?;
        self.send(request).await
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TebexError> {
        Ok(self.http_client.request(request).await?)
    }
}

/// Checks that a string argument is present, returning it unchanged.
fn required<'a>(
    value: &'a str,
    argument: &'static str,
    message: &str,
) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(argument, message));
    }
    Ok(value)
}

/// Checks that a numeric identifier is set.
fn required_id(id: u64, argument: &'static str, message: &str) -> Result<u64, ValidationError> {
    if id == 0 {
        return Err(ValidationError::missing(argument, message));
    }
    Ok(id)
}

/// Encodes a payload as a JSON request body.
fn payload_body<T: Serialize>(
    argument: &'static str,
    payload: &T,
) -> Result<serde_json::Value, ValidationError> {
    serde_json::to_value(payload).map_err(|e| ValidationError {
        argument,
        message: format!("Could not encode {argument}: {e}"),
    })
}
