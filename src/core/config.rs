//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables (and an optional `.env` file) or defaults.
//!
//! Slack credentials are deliberately absent: they are resolved on every
//! tool invocation, see [`crate::domains::slack::SlackCredentials`].

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Slack Web API base URL.
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

/// Default Slack request timeout in seconds.
pub const DEFAULT_SLACK_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Slack Web API client settings.
    pub slack: SlackApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Slack Web API client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackApiConfig {
    /// Base URL the API method name is appended to.
    pub base_url: String,

    /// Per-request timeout. Requests are never retried.
    pub timeout_secs: u64,
}

impl Default for SlackApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SLACK_API_URL.to_string(),
            timeout_secs: DEFAULT_SLACK_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "slack-message-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            slack: SlackApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(base_url) = lookup("MCP_SLACK_API_URL") {
            info!("Slack API base URL overridden: {}", base_url);
            config.slack.base_url = base_url;
        }

        if let Some(raw) = lookup("MCP_SLACK_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.slack.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_SLACK_TIMEOUT_SECS={:?}, using {}s",
                    raw, config.slack.timeout_secs
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.server.name, "slack-message-mcp");
        assert_eq!(config.server.version, "1.0.0");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.slack.base_url, "https://slack.com/api");
        assert_eq!(config.slack.timeout_secs, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("MCP_SERVER_NAME", "my-slack"),
            ("MCP_LOG_LEVEL", "debug"),
            ("MCP_SLACK_API_URL", "http://localhost:9999/api"),
            ("MCP_SLACK_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.server.name, "my-slack");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.slack.base_url, "http://localhost:9999/api");
        assert_eq!(config.slack.timeout_secs, 3);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for raw in ["abc", "0", "-5"] {
            let config = Config::from_lookup(lookup(&[("MCP_SLACK_TIMEOUT_SECS", raw)]));
            assert_eq!(config.slack.timeout_secs, DEFAULT_SLACK_TIMEOUT_SECS);
        }
    }

    #[test]
    fn test_slack_credentials_not_in_config() {
        let config = Config::from_lookup(lookup(&[("SLACK_BOT_TOKEN", "xoxb-secret")]));
        let serialized = serde_json::to_string(&config).unwrap();
        assert!(!serialized.contains("xoxb-secret"));
    }
}
