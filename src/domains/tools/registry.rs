//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - Tool metadata for `tools/list`
//! - Dispatch for `tools/call`

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::ToolError;
use super::definitions::SendMessageTool;
use crate::domains::slack::{EnvLookup, SlackApi, SlackCredentials};

/// Tool registry - manages all available tools.
///
/// Holds only read-only collaborators, so a single instance is shared
/// across concurrent invocations.
#[derive(Clone)]
pub struct ToolRegistry {
    slack: Arc<dyn SlackApi>,
    env: EnvLookup,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(slack: Arc<dyn SlackApi>, env: EnvLookup) -> Self {
        Self { slack, env }
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![SendMessageTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Missing arguments are treated as an empty object.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = arguments.unwrap_or_default();

        match name {
            SendMessageTool::NAME => {
                info!("Dispatching tool call: {}", name);
                let env = self.env.clone();
                SendMessageTool::execute(
                    &arguments,
                    move || SlackCredentials::from_lookup(|key| env(key)),
                    self.slack.as_ref(),
                )
                .await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}
