//! Account information lookup and its cache.

use serde::{Deserialize, Serialize};

use super::TebexClient;
use crate::endpoints::Endpoint;
use crate::error::TebexError;
use crate::favicon::{self, FAVICON_PLACEHOLDER};

/// The account information returned by `GET /information`.
///
/// The API's fields are kept as-is in [`fields`](Self::fields); `favicon`
/// is added by the client and is `"?"` when no icon was found.
///
/// # Example
///
/// ```rust
/// use tebex_api::AccountInformation;
/// use serde_json::json;
///
/// let info = AccountInformation::from_body(
///     json!({"account": {"id": 1, "domain": "https://shop.example.com"}}),
///     None,
/// );
///
/// assert_eq!(info.domain(), Some("https://shop.example.com"));
/// assert_eq!(info.favicon, "?");
/// assert_eq!(info.to_value()["favicon"], "?");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountInformation {
    /// Favicon URL of the store, or `"?"`.
    pub favicon: String,
    /// Every field returned by the API.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl AccountInformation {
    /// Builds the information from a response body and an optional favicon.
    #[must_use]
    pub fn from_body(body: serde_json::Value, favicon: Option<String>) -> Self {
        let mut fields = match body {
            serde_json::Value::Object(fields) => fields,
            other => {
                tracing::warn!(body = %other, "Unexpected account information payload");
                serde_json::Map::new()
            }
        };
        fields.remove("favicon");

        Self {
            favicon: favicon.unwrap_or_else(|| FAVICON_PLACEHOLDER.to_string()),
            fields,
        }
    }

    /// Returns the `account` object.
    #[must_use]
    pub fn account(&self) -> Option<&serde_json::Value> {
        self.fields.get("account")
    }

    /// Returns the `server` object.
    #[must_use]
    pub fn server(&self) -> Option<&serde_json::Value> {
        self.fields.get("server")
    }

    /// Returns the webstore domain (`account.domain`).
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.account()
            .and_then(|account| account.get("domain"))
            .and_then(serde_json::Value::as_str)
    }

    /// Returns the information as a single JSON object including `favicon`.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        let mut fields = self.fields.clone();
        fields.insert(
            "favicon".to_string(),
            serde_json::Value::String(self.favicon.clone()),
        );
        serde_json::Value::Object(fields)
    }
}

impl TebexClient {
    /// Returns the account information, fetching it on first use only.
    ///
    /// The lookup already happens during construction, so on a built client
    /// this never touches the network.
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the lookup fails.
    pub async fn information(&self) -> Result<&AccountInformation, TebexError> {
        self.information
            .get_or_try_init(|| self.fetch_information())
            .await
    }

    async fn fetch_information(&self) -> Result<AccountInformation, TebexError> {
        let body = self.get(Endpoint::Information.with_segments(&[]), &[]).await?;

        let domain = body
            .get("account")
            .and_then(|account| account.get("domain"))
            .and_then(serde_json::Value::as_str);

        let icon = match domain {
            Some(domain) if self.config.favicon_lookup() => {
                favicon::discover(self.http_client.transport(), domain).await
            }
            _ => None,
        };

        Ok(AccountInformation::from_body(body, icon))
    }
}
