//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use super::definitions::InputError;
use crate::domains::slack::{ConfigError, SlackError};

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool does not exist.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments failed validation.
    #[error("{0}")]
    InvalidInput(#[from] InputError),

    /// Slack credentials are missing or malformed.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The Slack API call failed.
    #[error("{0}")]
    Slack(#[from] SlackError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::UnknownTool(_) => McpError::invalid_request(err.to_string(), None),
            ToolError::InvalidInput(e) => McpError::invalid_params(e.message().to_string(), None),
            ToolError::Config(_) | ToolError::Slack(_) => {
                McpError::internal_error(format!("Failed to send Slack message: {}", err), None)
            }
        }
    }
}
