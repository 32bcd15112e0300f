//! Payment and checkout endpoints.

use serde_json::json;

use super::{payload_body, required, required_id, TebexClient};
use crate::clients::HttpMethod;
use crate::endpoints::Endpoint;
use crate::error::TebexError;
use crate::payloads::{PaymentPayload, PaymentStatus};

/// Number of payments returned by [`TebexClient::payments`] when no other
/// limit is needed.
pub const DEFAULT_PAYMENT_LIMIT: u32 = 100;

impl TebexClient {
    /// Lists the latest payments (`GET /payments?limit={limit}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn payments(&self, limit: u32) -> Result<serde_json::Value, TebexError> {
        self.get(
            Endpoint::Payments.with_segments(&[]),
            &[("limit", limit.to_string())],
        )
        .await
    }

    /// Returns one page of payments (`GET /payments?paged={page}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn payments_page(&self, page: u32) -> Result<serde_json::Value, TebexError> {
        self.get(
            Endpoint::Payments.with_segments(&[]),
            &[("paged", page.to_string())],
        )
        .await
    }

    /// Returns a single payment (`GET /payments/{transaction_id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `transaction_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn payment(&self, transaction_id: &str) -> Result<serde_json::Value, TebexError> {
        let transaction_id = required(
            transaction_id,
            "transaction_id",
            "No transaction ID to look up",
        )?;
        self.get(Endpoint::Payments.with_segments(&[transaction_id]), &[])
            .await
    }

    /// Records a manual payment (`POST /payments`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn create_payment(
        &self,
        payment: &PaymentPayload,
    ) -> Result<serde_json::Value, TebexError> {
        let body = payload_body("payment", payment)?;
        let response = self
            .send_json(HttpMethod::Post, Endpoint::Payments.with_segments(&[]), body)
            .await?;
        Ok(response.body)
    }

    /// Changes the status of a payment (`PUT /payments/{transaction_id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `transaction_id` or `username`
    /// is empty and [`TebexError::Http`] if the request fails.
    pub async fn update_payment(
        &self,
        transaction_id: &str,
        username: &str,
        status: PaymentStatus,
    ) -> Result<String, TebexError> {
        let transaction_id = required(
            transaction_id,
            "transaction_id",
            "No transaction ID to update",
        )?;
        let username = required(username, "username", "You have to set a username")?;

        self.send_form(
            HttpMethod::Put,
            Endpoint::Payments.with_segments(&[transaction_id]),
            json!({ "username": username, "status": status }),
        )
        .await?;

        Ok(format!("Payment {transaction_id} updated"))
    }

    /// Adds a note to a payment (`POST /payments/{transaction_id}/note`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `transaction_id` or `note` is
    /// empty and [`TebexError::Http`] if the request fails.
    pub async fn add_payment_note(
        &self,
        transaction_id: &str,
        note: &str,
    ) -> Result<String, TebexError> {
        let transaction_id = required(
            transaction_id,
            "transaction_id",
            "No transaction ID to add note",
        )?;
        let note = required(note, "note", "No note to add")?;

        self.send_form(
            HttpMethod::Post,
            Endpoint::Payments.with_segments(&[transaction_id, "note"]),
            json!({ "note": note }),
        )
        .await?;

        Ok(format!("Note added to payment {transaction_id}"))
    }

    /// Creates a checkout URL for a package (`POST /checkout`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `package_id` is zero or
    /// `username` is empty, and [`TebexError::Http`] if the request fails.
    pub async fn create_checkout_url(
        &self,
        package_id: u64,
        username: &str,
    ) -> Result<serde_json::Value, TebexError> {
        let package_id = required_id(
            package_id,
            "package_id",
            "No package ID to create checkout URL",
        )?;
        let username = required(username, "username", "No username to create checkout URL")?;

        let response = self
            .send_form(
                HttpMethod::Post,
                Endpoint::Checkout.with_segments(&[]),
                json!({ "package_id": package_id, "username": username }),
            )
            .await?;
        Ok(response.body)
    }
}
