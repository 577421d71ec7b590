// Game server client
//
// HTTP client for the remote Mastermind server. Maps the three session
// operations (create, guess, delete) onto the server's JSON endpoints.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::types::{ErrorResponse, GuessFeedback, GuessRequest, NewGameResponse};
use crate::config::Config;
use crate::game::{GameSession, Guess};

/// HTTP client bound to one server base URL.
///
/// One request is in flight at a time; callers await each call before
/// issuing the next. No retries: a failed attempt surfaces immediately.
pub struct GameClient {
    base_url: String,
    client: Client,
}

impl GameClient {
    /// Build a client from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.server_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Start a new game session. `POST /game`, no body.
    pub async fn create_game(&self) -> Result<GameSession> {
        let url = format!("{}/game", self.base_url);
        debug!(url = %url, "Creating game");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .context("Could not reach the game server")?;

        let new_game: NewGameResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .context("Failed to decode create-game response")?;

        if new_game.game_id.is_empty() {
            anyhow::bail!("Server returned an empty game id");
        }

        info!(game_id = %new_game.game_id, "Game created");
        Ok(GameSession::new(new_game.game_id))
    }

    /// Submit a validated guess. `POST /guess` with `{game_id, guess}`.
    pub async fn submit_guess(
        &self,
        session: &GameSession,
        guess: &Guess,
    ) -> Result<GuessFeedback> {
        let url = format!("{}/guess", self.base_url);
        let request = GuessRequest {
            game_id: session.id().to_string(),
            guess: guess.as_str().to_string(),
        };
        debug!(url = %url, guess = %guess, "Submitting guess");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Could not send guess to the game server")?;

        Self::check_status(response)
            .await?
            .json()
            .await
            .context("Failed to decode guess response")
    }

    /// Tear down the session. `DELETE /game/{game_id}`.
    ///
    /// Callers treat failure here as non-fatal cleanup.
    pub async fn delete_game(&self, session: &GameSession) -> Result<()> {
        let url = format!("{}/game/{}", self.base_url, session.id());
        debug!(url = %url, "Deleting game");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Could not send delete request")?;

        Self::check_status(response).await?;
        info!(game_id = %session.id(), "Game deleted");
        Ok(())
    }

    /// Turn a non-success status into an error, quoting the server's
    /// `error` field when the body carries one.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => anyhow::bail!("Server error ({}): {}", status, err.error),
            Err(_) => anyhow::bail!("Server error ({}): {}", status, body),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = Config {
            server_url: "http://127.0.0.1:9999/".to_string(),
            ..Config::default()
        };
        let client = GameClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }
}
