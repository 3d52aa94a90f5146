//! Send message tool definition.
//!
//! Posts either plain text or a list of Block Kit blocks to the configured
//! Slack channel. Exactly one of the two must be supplied.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::domains::slack::{SlackApi, SlackCredentials};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Send either a plain text message or Slack Block Kit blocks, but not both.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SendMessageParams {
    /// Plain text message body.
    #[schemars(description = "Plain text message to send (mutually exclusive with blocks)")]
    pub message: Option<String>,

    /// Block Kit blocks for rich layout.
    #[schemars(description = "Slack Block Kit blocks to send (mutually exclusive with message)")]
    pub blocks: Option<Vec<Value>>,
}

/// Validated tool input: exactly one of text or blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum SendMessageInput {
    Text(String),
    Blocks(Vec<Value>),
}

/// Input validation failure.
///
/// Holds every violation found; the first is what callers see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct InputError {
    violations: Vec<String>,
}

impl InputError {
    pub const MISSING: &'static str = "Either message or blocks must be provided";
    pub const CONFLICT: &'static str = "Only one of message or blocks should be provided";

    fn single(msg: impl Into<String>) -> Self {
        Self {
            violations: vec![msg.into()],
        }
    }

    /// First violation message.
    pub fn message(&self) -> &str {
        self.violations
            .first()
            .map(String::as_str)
            .unwrap_or("Invalid input")
    }
}

/// JSON type name used in type-mismatch messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl SendMessageInput {
    /// Validate raw tool arguments.
    pub fn from_arguments(arguments: &JsonObject) -> Result<Self, InputError> {
        let mut violations = Vec::new();

        let message = match arguments.get("message") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                violations.push(format!("Expected string, received {}", json_kind(other)));
                None
            }
        };

        let blocks = match arguments.get("blocks") {
            None => None,
            Some(Value::Array(items)) => Some(items.clone()),
            Some(other) => {
                violations.push(format!("Expected array, received {}", json_kind(other)));
                None
            }
        };

        if !violations.is_empty() {
            return Err(InputError { violations });
        }

        match (message, blocks) {
            (Some(text), None) => Ok(Self::Text(text)),
            (None, Some(blocks)) => Ok(Self::Blocks(blocks)),
            (None, None) => Err(InputError::single(InputError::MISSING)),
            (Some(_), Some(_)) => Err(InputError::single(InputError::CONFLICT)),
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Blocks(_) => "blocks",
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Send message tool - posts to the configured Slack channel.
pub struct SendMessageTool;

impl SendMessageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "send_message";

    /// Human-readable title.
    pub const TITLE: &'static str = "Send Slack Message";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Send a message to the configured Slack channel";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(Self::TITLE.into()),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: Self::input_schema(),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: None,
        }
    }

    /// JSON schema for the arguments.
    ///
    /// Both fields are optional but never nullable: `null` fails validation,
    /// so the `nullable` markers schemars adds to `Option` fields are removed.
    pub fn input_schema() -> Arc<JsonObject> {
        let mut schema = cached_schema_for_type::<SendMessageParams>().as_ref().clone();
        if let Some(Value::Object(properties)) = schema.get_mut("properties") {
            for property in properties.values_mut() {
                if let Value::Object(property) = property {
                    property.remove("nullable");
                }
            }
        }
        Arc::new(schema)
    }

    /// Execute the tool: validate, resolve credentials, post.
    #[instrument(skip_all)]
    pub async fn execute<F>(
        arguments: &JsonObject,
        credentials: F,
        slack: &dyn SlackApi,
    ) -> Result<CallToolResult, ToolError>
    where
        F: FnOnce() -> Result<SlackCredentials, crate::domains::slack::ConfigError>,
    {
        let input = SendMessageInput::from_arguments(arguments).map_err(|e| {
            warn!("Rejected send_message arguments: {}", e);
            e
        })?;

        let credentials = credentials()?;
        info!(
            "Sending {} message to channel {}",
            input.kind(),
            credentials.channel_id
        );

        let result = slack.post_message(&credentials, &input).await?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Message sent successfully! Timestamp: {}",
            result.ts
        ))]))
    }
}
