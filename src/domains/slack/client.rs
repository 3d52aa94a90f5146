//! Slack Web API adapter.
//!
//! Turns a validated [`SendMessageInput`] into exactly one
//! `chat.postMessage` call and normalizes the outcome. There is no retry
//! loop; every failure is reported to the caller once.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use super::config::SlackCredentials;
use super::error::SlackError;
use crate::core::config::SlackApiConfig;
use crate::domains::tools::definitions::SendMessageInput;

/// Web API method used to post messages.
const POST_MESSAGE_METHOD: &str = "chat.postMessage";

/// Outcome of a successful post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub success: bool,

    /// Slack message timestamp, which doubles as the message id.
    pub ts: String,
}

/// Abstraction over the outbound Slack call.
///
/// The dispatcher only depends on this trait so it can be exercised
/// without network access.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Post one message to the credentials' channel.
    async fn post_message(
        &self,
        credentials: &SlackCredentials,
        input: &SendMessageInput,
    ) -> Result<SendResult, SlackError>;
}

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocks: Option<&'a [serde_json::Value]>,
}

impl<'a> PostMessageRequest<'a> {
    fn new(channel: &'a str, input: &'a SendMessageInput) -> Self {
        match input {
            SendMessageInput::Text(text) => Self {
                channel,
                text: Some(text.as_str()),
                blocks: None,
            },
            SendMessageInput::Blocks(blocks) => Self {
                channel,
                text: None,
                blocks: Some(blocks.as_slice()),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PostMessageResponse {
    #[serde(default)]
    ok: bool,
    ts: Option<String>,
    error: Option<String>,
}

/// `reqwest`-backed Slack client.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    base_url: String,
}

impl SlackClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SlackError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("slack-message-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the server configuration.
    pub fn from_config(config: &SlackApiConfig) -> Result<Self, SlackError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, POST_MESSAGE_METHOD)
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    #[instrument(skip_all, fields(channel = %credentials.channel_id, kind = input.kind()))]
    async fn post_message(
        &self,
        credentials: &SlackCredentials,
        input: &SendMessageInput,
    ) -> Result<SendResult, SlackError> {
        let body = PostMessageRequest::new(&credentials.channel_id, input);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&credentials.bot_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("{} request failed: {}", POST_MESSAGE_METHOD, e);
                SlackError::Transport(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let parsed: PostMessageResponse = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            debug!("Unparseable {} response body: {}", POST_MESSAGE_METHOD, e);
            PostMessageResponse::default()
        });

        if !parsed.ok {
            if let Some(code) = parsed.error {
                error!("Slack rejected message: {}", code);
                return Err(SlackError::Api(code));
            }
            if !status.is_success() {
                error!("{} HTTP {}", POST_MESSAGE_METHOD, status);
                return Err(SlackError::Http(status));
            }
            error!("Slack returned ok: false without an error code");
            return Err(SlackError::NotOk);
        }

        let ts = parsed.ts.ok_or(SlackError::MissingTimestamp)?;
        info!("Message posted (ts={})", ts);

        Ok(SendResult { success: true, ts })
    }
}
