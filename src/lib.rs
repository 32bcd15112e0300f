//! # Tebex Plugin API Rust client
//!
//! An async client for the Tebex Plugin API, the server-side API used by game
//! server plugins to read a webstore's listing, deliver purchased commands
//! and manage payments, gift cards, coupons and bans.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`TebexClient`], one async method per API endpoint
//! - Type-safe configuration via [`TebexConfig`] and [`TebexConfigBuilder`]
//! - Validated newtypes for the secret and base URL
//! - Request payloads ([`PaymentPayload`], [`GiftCardPayload`], [`CouponPayload`])
//!   with closed enumerations for every string choice
//! - A layered error model: local [`ValidationError`]s, API
//!   [`HttpResponseError`]s and network failures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tebex_api::{PaymentStatus, TebexClient};
//!
//! // Construction fetches /information and fails on a rejected secret.
//! let client = TebexClient::new("your-server-secret").await?;
//!
//! let info = client.information().await?;
//! println!("Store domain: {:?}, favicon: {}", info.domain(), info.favicon);
//!
//! // Deliver offline commands, then acknowledge them.
//! let due = client.due_offline_commands().await?;
//! let ids: Vec<u64> = due["commands"]
//!     .as_array()
//!     .into_iter()
//!     .flatten()
//!     .filter_map(|c| c["id"].as_u64())
//!     .collect();
//! if !ids.is_empty() {
//!     println!("{}", client.delete_due_commands(&ids).await?);
//! }
//!
//! client.update_payment("tbx-123", "Notch", PaymentStatus::Refund).await?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use tebex_api::{BaseUrl, Secret, TebexConfig};
//!
//! let config = TebexConfig::builder()
//!     .secret(Secret::new("your-server-secret").unwrap())
//!     .base_url(BaseUrl::new("https://plugin.tebex.io").unwrap())
//!     .user_agent_prefix("MyPlugin/2.1")
//!     .favicon_lookup(false)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based
//! - **Fail-fast validation**: arguments are checked before any request is sent
//! - **One request per call**: no retries, no background work
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod client;
pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod favicon;
pub mod payloads;

pub use client::{AccountInformation, TebexClient, DEFAULT_PAYMENT_LIMIT};
pub use config::{BaseUrl, Secret, TebexConfig, TebexConfigBuilder};
pub use endpoints::Endpoint;
pub use error::{ConfigError, TebexError, ValidationError};

pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

pub use payloads::{
    BasketType, CouponPayload, DiscountApplicationMethod, DiscountType, EffectiveOn,
    GiftCardPayload, PaymentPayload, PaymentStatus,
};
