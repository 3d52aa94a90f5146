//! Slack-specific error types.

use thiserror::Error;

/// Errors raised while resolving Slack credentials from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `SLACK_BOT_TOKEN` is unset or empty.
    #[error("SLACK_BOT_TOKEN is required")]
    MissingToken,

    /// `SLACK_CHANNEL_ID` is unset or empty.
    #[error("SLACK_CHANNEL_ID is required")]
    MissingChannel,

    /// `SLACK_CHANNEL_ID` does not name a public or private channel.
    #[error("SLACK_CHANNEL_ID must start with C (public channel) or G (private channel)")]
    InvalidChannel(String),
}

/// Errors returned by the Slack Web API adapter.
#[derive(Debug, Error)]
pub enum SlackError {
    /// Slack answered with `ok: false` and an error code.
    #[error("Slack API error: {0}")]
    Api(String),

    /// Slack answered with `ok: false` and no error code.
    #[error("Slack API returned ok: false")]
    NotOk,

    /// Non-success HTTP status without a Slack error code in the body.
    #[error("Slack API HTTP error: {0}")]
    Http(reqwest::StatusCode),

    /// Slack reported success but the response had no message timestamp.
    #[error("Slack API response missing ts")]
    MissingTimestamp,

    /// The request never produced a readable response.
    #[error("Request to Slack failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SlackError {
    /// Create a new API error from a Slack error code.
    pub fn api(code: impl Into<String>) -> Self {
        Self::Api(code.into())
    }

    /// The Slack error code, when Slack supplied one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api(code) => Some(code),
            _ => None,
        }
    }
}
