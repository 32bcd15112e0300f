//! Coupon endpoints.

use super::{payload_body, required, TebexClient};
use crate::clients::HttpMethod;
use crate::endpoints::Endpoint;
use crate::error::TebexError;
use crate::payloads::CouponPayload;

impl TebexClient {
    /// Lists coupons (`GET /coupons`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn coupons(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::Coupons.with_segments(&[]), &[]).await
    }

    /// Returns a single coupon (`GET /coupons/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `coupon_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn coupon(&self, coupon_id: &str) -> Result<serde_json::Value, TebexError> {
        let coupon_id = required(coupon_id, "coupon_id", "No coupon ID to look up")?;
        self.get(Endpoint::Coupons.with_segments(&[coupon_id]), &[])
            .await
    }

    /// Creates a coupon (`POST /coupons`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn create_coupon(
        &self,
        coupon: &CouponPayload,
    ) -> Result<serde_json::Value, TebexError> {
        let body = payload_body("coupon", coupon)?;
        let response = self
            .send_json(HttpMethod::Post, Endpoint::Coupons.with_segments(&[]), body)
            .await?;
        Ok(response.body)
    }

    /// Deletes a coupon (`DELETE /coupons/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `coupon_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn delete_coupon(&self, coupon_id: &str) -> Result<String, TebexError> {
        let coupon_id = required(coupon_id, "coupon_id", "No coupon ID to delete")?;
        self.delete(Endpoint::Coupons.with_segments(&[coupon_id]))
            .await?;
        Ok(format!("Coupon {coupon_id} deleted"))
    }
}
