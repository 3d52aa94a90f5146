//! Slack Message MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing a single tool,
//! `send_message`, which posts plain text or Block Kit blocks to one
//! pre-configured Slack channel.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the STDIO transport
//! - **domains**: business logic organized by bounded contexts
//!   - **slack**: credential resolution and the `chat.postMessage` adapter
//!   - **tools**: tool definitions, input validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use slack_message_mcp::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, StdioTransport};
