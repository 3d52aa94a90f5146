//! Error types and handling for the MCP server.
//!
//! Per-call failures never reach this type: they are answered as MCP
//! protocol errors. Only startup and transport failures end up here.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The Slack HTTP client could not be built.
    #[error("Slack error: {0}")]
    Slack(#[from] crate::domains::slack::SlackError),

    /// The transport failed to start or aborted.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
