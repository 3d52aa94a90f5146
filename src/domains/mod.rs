//! Domains module containing business logic organized by bounded contexts.
//!
//! - **slack**: credentials and the Slack Web API adapter
//! - **tools**: the MCP tools exposed to clients

pub mod slack;
pub mod tools;
