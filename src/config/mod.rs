//! Configuration types for the Tebex API client.
//!
//! # Overview
//!
//! - [`TebexConfig`]: immutable settings shared by the HTTP layer
//! - [`TebexConfigBuilder`]: builder for [`TebexConfig`]
//! - [`Secret`]: the validated server secret, masked in debug output
//! - [`BaseUrl`]: the validated API host
//!
//! # Example
//!
//! ```rust
//! use tebex_api::{BaseUrl, Secret, TebexConfig};
//!
//! let config = TebexConfig::builder()
//!     .secret(Secret::new("my-secret").unwrap())
//!     .base_url(BaseUrl::new("https://plugin.tebex.io").unwrap())
//!     .user_agent_prefix("MyPlugin/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert!(config.favicon_lookup());
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Secret};

use crate::error::ConfigError;

/// Configuration for the Tebex API client.
///
/// `TebexConfig` is `Clone`, `Send` and `Sync`.
#[derive(Clone, Debug)]
pub struct TebexConfig {
    secret: Secret,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    favicon_lookup: bool,
}

impl TebexConfig {
    /// Creates a new builder for constructing a `TebexConfig`.
    #[must_use]
    pub fn builder() -> TebexConfigBuilder {
        TebexConfigBuilder::new()
    }

    /// Creates a configuration with default settings for the given secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecret`] if the secret is empty.
    pub fn with_secret(secret: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().secret(Secret::new(secret)?).build()
    }

    /// Returns the server secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether the account favicon is looked up after fetching information.
    #[must_use]
    pub const fn favicon_lookup(&self) -> bool {
        self.favicon_lookup
    }
}

// Verify TebexConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TebexConfig>();
};

/// Builder for constructing [`TebexConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://plugin.tebex.io`
/// - `user_agent_prefix`: `None`
/// - `favicon_lookup`: `true`
#[derive(Debug, Default)]
pub struct TebexConfigBuilder {
    secret: Option<Secret>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    favicon_lookup: Option<bool>,
}

impl TebexConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server secret (required).
    #[must_use]
    pub fn secret(mut self, secret: Secret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Enables or disables the favicon lookup. When disabled the
    /// information's `favicon` is always `"?"` and no extra request is made.
    #[must_use]
    pub const fn favicon_lookup(mut self, enabled: bool) -> Self {
        self.favicon_lookup = Some(enabled);
        self
    }

    /// Builds the [`TebexConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `secret` is not set.
    pub fn build(self) -> Result<TebexConfig, ConfigError> {
        let secret = self
            .secret
            .ok_or(ConfigError::MissingRequiredField { field: "secret" })?;

        Ok(TebexConfig {
            secret,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            favicon_lookup: self.favicon_lookup.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_secret() {
        let result = TebexConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "secret" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = TebexConfig::builder()
            .secret(Secret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://plugin.tebex.io");
        assert!(config.user_agent_prefix().is_none());
        assert!(config.favicon_lookup());
    }

    #[test]
    fn test_with_secret_rejects_empty() {
        assert!(matches!(
            TebexConfig::with_secret(""),
            Err(ConfigError::EmptySecret)
        ));
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let config = TebexConfig::with_secret("very-secret").unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("TebexConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://localhost:8080").unwrap();

        let config = TebexConfig::builder()
            .secret(Secret::new("secret").unwrap())
            .base_url(base_url.clone())
            .user_agent_prefix("MyPlugin/1.0")
            .favicon_lookup(false)
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.user_agent_prefix(), Some("MyPlugin/1.0"));
        assert!(!config.favicon_lookup());
        assert_eq!(config.secret().as_ref(), "secret");
    }
}
