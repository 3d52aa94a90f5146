//! STDIO transport.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::{info, instrument};

use crate::core::{McpServer, Result};

/// Failures that end an STDIO session.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The client never completed the `initialize` handshake.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// The session task stopped abnormally.
    #[error("MCP session aborted: {0}")]
    Session(String),
}

/// Serves one MCP session over the process's stdin/stdout.
pub struct StdioTransport;

impl StdioTransport {
    /// Run until the client closes stdin.
    ///
    /// Dropping the returned future tears the session down, which is how
    /// the entry point stops on a shutdown signal.
    #[instrument(skip_all)]
    pub async fn run(server: McpServer) -> Result<()> {
        info!("Ready - communicating via stdin/stdout");

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Handshake(e.to_string()))?;

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::Session(e.to_string()))?;

        info!("Client disconnected: {:?}", reason);
        Ok(())
    }
}
