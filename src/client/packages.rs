//! Listing, package and community goal endpoints.

use super::{required_id, TebexClient};
use crate::clients::HttpMethod;
use crate::endpoints::Endpoint;
use crate::error::{TebexError, ValidationError};

impl TebexClient {
    /// Returns the categories and packages shown in-game (`GET /listing`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn listing(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::Listing.with_segments(&[]), &[]).await
    }

    /// Lists every package (`GET /packages?verbose={verbose}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn packages(&self, verbose: bool) -> Result<serde_json::Value, TebexError> {
        self.get(
            Endpoint::Packages.with_segments(&[]),
            &[("verbose", verbose.to_string())],
        )
        .await
    }

    /// Returns a single package (`GET /packages/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `package_id` is zero and
    /// [`TebexError::Http`] if the request fails.
    pub async fn package(&self, package_id: u64) -> Result<serde_json::Value, TebexError> {
        let package_id = required_id(package_id, "package_id", "No package ID to look up")?;
        self.get(
            Endpoint::Packages.with_segments(&[&package_id.to_string()]),
            &[],
        )
        .await
    }

    /// Updates fields of a package (`PUT /packages/{id}`).
    ///
    /// `update_data` must be a non-empty JSON object such as
    /// `{"disabled": true, "name": "VIP", "price": 10}`.
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `update_data` is empty or
    /// `package_id` is zero, and [`TebexError::Http`] if the request fails.
    pub async fn update_package(
        &self,
        package_id: u64,
        update_data: serde_json::Value,
    ) -> Result<String, TebexError> {
        if !update_data.as_object().is_some_and(|fields| !fields.is_empty()) {
            return Err(ValidationError::missing("update_data", "No data to update").into());
        }
        let package_id = required_id(package_id, "package_id", "No package ID to update")?;

        self.send_json(
            HttpMethod::Put,
            Endpoint::Packages.with_segments(&[&package_id.to_string()]),
            update_data,
        )
        .await?;

        Ok(format!("Package {package_id} updated"))
    }

    /// Lists community goals (`GET /community_goals`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn community_goals(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::CommunityGoals.with_segments(&[]), &[])
            .await
    }

    /// Returns a single community goal (`GET /community_goals/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `goal_id` is zero and
    /// [`TebexError::Http`] if the request fails.
    pub async fn community_goal(&self, goal_id: u64) -> Result<serde_json::Value, TebexError> {
        let goal_id = required_id(goal_id, "goal_id", "No community goal ID to look up")?;
        self.get(
            Endpoint::CommunityGoals.with_segments(&[&goal_id.to_string()]),
            &[],
        )
        .await
    }
}
