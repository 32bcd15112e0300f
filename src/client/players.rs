//! Ban, sale, player lookup and customer purchase endpoints.

use serde_json::json;

use super::{required, TebexClient};
use crate::clients::HttpMethod;
use crate::endpoints::Endpoint;
use crate::error::TebexError;

impl TebexClient {
    /// Lists bans (`GET /bans`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn bans(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::Bans.with_segments(&[]), &[]).await
    }

    /// Bans a player from the webstore (`POST /bans`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `reason`, `ip` or `user` is
    /// empty and [`TebexError::Http`] if the request fails.
    pub async fn create_ban(
        &self,
        reason: &str,
        ip: &str,
        user: &str,
    ) -> Result<serde_json::Value, TebexError> {
        let reason = required(reason, "reason", "No reason to create ban")?;
        let ip = required(ip, "ip", "No ip to create ban")?;
        let user = required(user, "user", "No user to create ban")?;

        let response = self
            .send_form(
                HttpMethod::Post,
                Endpoint::Bans.with_segments(&[]),
                json!({ "reason": reason, "ip": ip, "user": user }),
            )
            .await?;
        Ok(response.body)
    }

    /// Lists active sales (`GET /sales`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn sales(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::Sales.with_segments(&[]), &[]).await
    }

    /// Looks up a player by username (`GET /user/{username}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `username` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn player_lookup(&self, username: &str) -> Result<serde_json::Value, TebexError> {
        let username = required(username, "username", "No username to lookup")?;
        self.get(Endpoint::User.with_segments(&[username]), &[])
            .await
    }

    /// Lists the active packages of a player
    /// (`GET /player/{player_id}/packages[?package={package_id}]`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `player_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn customer_purchases(
        &self,
        player_id: &str,
        package_id: Option<u64>,
    ) -> Result<serde_json::Value, TebexError> {
        let player_id = required(player_id, "player_id", "No player ID to lookup")?;

        let query: Vec<(&str, String)> = package_id
            .filter(|id| *id != 0)
            .map(|id| ("package", id.to_string()))
            .into_iter()
            .collect();

        self.get(
            Endpoint::Player.with_segments(&[player_id, "packages"]),
            &query,
        )
        .await
    }
}
