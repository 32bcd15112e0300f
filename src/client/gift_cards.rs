//! Gift card endpoints.

use serde_json::json;

use super::{payload_body, required, TebexClient};
use crate::clients::HttpMethod;
use crate::endpoints::Endpoint;
use crate::error::TebexError;
use crate::payloads::GiftCardPayload;

impl TebexClient {
    /// Lists gift cards (`GET /gift-cards`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn gift_cards(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::GiftCards.with_segments(&[]), &[]).await
    }

    /// Returns a single gift card (`GET /gift-cards/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `gift_card_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn gift_card(&self, gift_card_id: &str) -> Result<serde_json::Value, TebexError> {
        let gift_card_id = required(gift_card_id, "gift_card_id", "No giftcard ID to look up")?;
        self.get(Endpoint::GiftCards.with_segments(&[gift_card_id]), &[])
            .await
    }

    /// Issues a new gift card (`POST /gift-cards`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn create_gift_card(
        &self,
        gift_card: &GiftCardPayload,
    ) -> Result<serde_json::Value, TebexError> {
        let body = payload_body("gift_card", gift_card)?;
        let response = self
            .send_json(HttpMethod::Post, Endpoint::GiftCards.with_segments(&[]), body)
            .await?;
        Ok(response.body)
    }

    /// Voids a gift card (`DELETE /gift-cards/{id}`) and returns the server's answer.
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `gift_card_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn delete_gift_card(
        &self,
        gift_card_id: &str,
    ) -> Result<serde_json::Value, TebexError> {
        let gift_card_id = required(gift_card_id, "gift_card_id", "No giftcard ID to delete")?;
        let response = self
            .delete(Endpoint::GiftCards.with_segments(&[gift_card_id]))
            .await?;
        Ok(response.body)
    }

    /// Tops up a gift card (`PUT /gift-cards/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `gift_card_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn update_gift_card(
        &self,
        gift_card_id: &str,
        amount: u64,
    ) -> Result<String, TebexError> {
        let gift_card_id = required(gift_card_id, "gift_card_id", "No giftcard ID to update")?;

        self.send_form(
            HttpMethod::Put,
            Endpoint::GiftCards.with_segments(&[gift_card_id]),
            json!({ "amount": amount }),
        )
        .await?;

        Ok(format!("Giftcard {gift_card_id} updated with amount {amount}"))
    }
}
