//! Gift card creation payload.

use chrono::NaiveDate;
use serde::Serialize;

use super::far_future;

/// Body of `POST /gift-cards`.
///
/// Defaults: expires on `2050-12-31`, empty note, amount `0`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use tebex_api::GiftCardPayload;
///
/// let gift_card = GiftCardPayload::builder()
///     .amount(25)
///     .note("Event prize")
///     .expires_at(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
///     .build();
///
/// assert_eq!(gift_card.amount(), 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GiftCardPayload {
    expires_at: NaiveDate,
    note: String,
    amount: u64,
}

impl GiftCardPayload {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> GiftCardPayloadBuilder {
        GiftCardPayloadBuilder::default()
    }

    /// Returns the expiry date.
    #[must_use]
    pub const fn expires_at(&self) -> NaiveDate {
        self.expires_at
    }

    /// Returns the note.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Returns the starting balance.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }
}

impl Default for GiftCardPayload {
    fn default() -> Self {
        GiftCardPayloadBuilder::default().build()
    }
}

/// Builder for [`GiftCardPayload`].
#[derive(Debug, Default)]
pub struct GiftCardPayloadBuilder {
    expires_at: Option<NaiveDate>,
    note: String,
    amount: u64,
}

impl GiftCardPayloadBuilder {
    /// Sets the expiry date.
    #[must_use]
    pub const fn expires_at(mut self, expires_at: NaiveDate) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets the starting balance.
    #[must_use]
    pub const fn amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    /// Builds the payload.
    #[must_use]
    pub fn build(self) -> GiftCardPayload {
        GiftCardPayload {
            expires_at: self.expires_at.unwrap_or_else(far_future),
            note: self.note,
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        assert_eq!(
            serde_json::to_value(GiftCardPayload::default()).unwrap(),
            json!({"expires_at": "2050-12-31", "note": "", "amount": 0})
        );
    }

    #[test]
    fn test_custom_values() {
        let gift_card = GiftCardPayload::builder()
            .amount(50)
            .note("Birthday")
            .expires_at(NaiveDate::from_ymd_opt(2031, 6, 15).unwrap())
            .build();

        assert_eq!(
            serde_json::to_value(&gift_card).unwrap(),
            json!({"expires_at": "2031-06-15", "note": "Birthday", "amount": 50})
        );
    }
}
