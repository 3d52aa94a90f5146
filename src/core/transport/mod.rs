//! Transport layer for the MCP server.
//!
//! The server is spawned by its client and speaks newline-delimited
//! JSON-RPC over stdin/stdout. Stdout carries protocol frames only.

mod stdio;

pub use stdio::{StdioTransport, TransportError};
