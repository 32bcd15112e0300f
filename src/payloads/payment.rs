//! Manual payment payload and payment status.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Status a payment can be moved to with
/// [`TebexClient::update_payment`](crate::TebexClient::update_payment).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// The payment completed successfully.
    Complete,
    /// The payment was charged back.
    Chargeback,
    /// The payment was refunded.
    Refund,
}

impl PaymentStatus {
    const ALL: [&'static str; 3] = ["complete", "chargeback", "refund"];

    /// Returns the wire value of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Chargeback => "chargeback",
            Self::Refund => "refund",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ValidationError::missing("status", "You have to set a status")),
            "complete" => Ok(Self::Complete),
            "chargeback" => Ok(Self::Chargeback),
            "refund" => Ok(Self::Refund),
            other => Err(ValidationError::unrecognized("status", other, &Self::ALL)),
        }
    }
}

/// Body of `POST /payments`, recording a payment made outside the webstore.
///
/// # Example
///
/// ```rust
/// use tebex_api::PaymentPayload;
///
/// let payment = PaymentPayload::builder()
///     .ign("Notch")
///     .package_id(1234)
///     .packages(vec![1234])
///     .price(9.99)
///     .note("Paid in person")
///     .package_option("server", "survival")
///     .build()
///     .unwrap();
///
/// assert_eq!(payment.ign(), "Notch");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentPayload {
    note: String,
    package_options: BTreeMap<String, serde_json::Value>,
    package_id: u64,
    packages: Vec<u64>,
    price: f64,
    ign: String,
}

impl PaymentPayload {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> PaymentPayloadBuilder {
        PaymentPayloadBuilder::default()
    }

    /// Returns the in-game name of the buyer.
    #[must_use]
    pub fn ign(&self) -> &str {
        &self.ign
    }

    /// Returns the primary package id.
    #[must_use]
    pub const fn package_id(&self) -> u64 {
        self.package_id
    }

    /// Returns the ordered list of package ids.
    #[must_use]
    pub fn packages(&self) -> &[u64] {
        &self.packages
    }

    /// Returns the price paid.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the note attached to the payment.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Returns the package options, keyed by option name.
    #[must_use]
    pub const fn package_options(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.package_options
    }
}

/// Builder for [`PaymentPayload`]. `ign`, `package_id` and `price` are required.
#[derive(Debug, Default)]
pub struct PaymentPayloadBuilder {
    note: String,
    package_options: BTreeMap<String, serde_json::Value>,
    package_id: Option<u64>,
    packages: Vec<u64>,
    price: Option<f64>,
    ign: Option<String>,
}

impl PaymentPayloadBuilder {
    /// Sets the in-game name of the buyer (required).
    #[must_use]
    pub fn ign(mut self, ign: impl Into<String>) -> Self {
        self.ign = Some(ign.into());
        self
    }

    /// Sets the primary package id (required).
    #[must_use]
    pub const fn package_id(mut self, package_id: u64) -> Self {
        self.package_id = Some(package_id);
        self
    }

    /// Sets the ordered list of purchased package ids.
    #[must_use]
    pub fn packages(mut self, packages: Vec<u64>) -> Self {
        self.packages = packages;
        self
    }

    /// Sets the price paid (required).
    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the note attached to the payment.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Adds a single package option.
    #[must_use]
    pub fn package_option(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.package_options.insert(name.into(), value.into());
        self
    }

    /// Builds the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `ign`, `package_id` or `price` is
    /// missing, if `ign` is empty, or if `price` is NaN or infinite.
    pub fn build(self) -> Result<PaymentPayload, ValidationError> {
        let ign = self
            .ign
            .filter(|ign| !ign.trim().is_empty())
            .ok_or_else(|| ValidationError::missing("ign", "No in-game name for the payment"))?;
        let package_id = self
            .package_id
            .ok_or_else(|| ValidationError::missing("package_id", "No package ID for the payment"))?;
        let price = self
            .price
            .ok_or_else(|| ValidationError::missing("price", "No price for the payment"))?;
        if !price.is_finite() {
            return Err(ValidationError::missing(
                "price",
                "The payment price must be a finite number",
            ));
        }

        Ok(PaymentPayload {
            note: self.note,
            package_options: self.package_options,
            package_id,
            packages: self.packages,
            price,
            ign,
        })
    }
}
