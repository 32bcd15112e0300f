//! Command queue endpoints.

use serde_json::json;

use super::{required, TebexClient};
use crate::clients::HttpMethod;
use crate::endpoints::Endpoint;
use crate::error::{TebexError, ValidationError};

impl TebexClient {
    /// Lists the players with commands due (`GET /queue`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn due_commands(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::Queue.with_segments(&[]), &[]).await
    }

    /// Lists the commands that run regardless of whether the player is online
    /// (`GET /queue/offline-commands`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Http`] if the request fails.
    pub async fn due_offline_commands(&self) -> Result<serde_json::Value, TebexError> {
        self.get(Endpoint::QueueOfflineCommands.with_segments(&[]), &[])
            .await
    }

    /// Lists the commands waiting for a player to come online
    /// (`GET /queue/online-commands/{player_id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `player_id` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn due_online_commands(
        &self,
        player_id: &str,
    ) -> Result<serde_json::Value, TebexError> {
        let player_id = required(player_id, "player_id", "No player ID to get commands")?;
        self.get(Endpoint::QueueOnlineCommands.with_segments(&[player_id]), &[])
            .await
    }

    /// Acknowledges executed commands (`DELETE /queue`).
    ///
    /// Returns a message with the number of commands deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TebexError::Validation`] if `command_ids` is empty and
    /// [`TebexError::Http`] if the request fails.
    pub async fn delete_due_commands(&self, command_ids: &[u64]) -> Result<String, TebexError> {
        if command_ids.is_empty() {
            return Err(ValidationError::missing("command_ids", "No commands to delete").into());
        }

        self.send_json(
            HttpMethod::Delete,
            Endpoint::Queue.with_segments(&[]),
            json!({ "ids": command_ids }),
        )
        .await?;

        Ok(format!("{} commands deleted", command_ids.len()))
    }
}
