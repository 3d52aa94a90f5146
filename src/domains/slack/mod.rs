//! Slack domain module.
//!
//! Everything needed to talk to Slack's Web API:
//!
//! - `config.rs` - per-invocation credential resolution from the environment
//! - `client.rs` - the `chat.postMessage` adapter behind the `SlackApi` trait
//! - `error.rs` - configuration and remote API error types

pub mod client;
pub mod config;
mod error;

pub use client::{SendResult, SlackApi, SlackClient};
pub use config::{EnvLookup, SlackCredentials, fixed_env, process_env};
pub use error::{ConfigError, SlackError};
