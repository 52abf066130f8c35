//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (with `.env` support via dotenvy) or defaults.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Default base URL of the GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// GitHub API credentials and endpoint.
    pub github: GithubConfig,
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

/// Configuration for the GitHub API upstream.
#[derive(Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Personal access token used for bearer authentication.
    pub token: String,

    /// Base URL of the GitHub REST API.
    pub api_url: String,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "gists-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            github: GithubConfig {
                token: "test-token".to_string(),
                api_url: DEFAULT_API_URL.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GITHUB_TOKEN` is required; startup fails without it. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, and `GITHUB_API_URL` are optional overrides.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.github.token = std::env::var("GITHUB_TOKEN")
            .map_err(|_| Error::config("GITHUB_TOKEN environment variable is required"))?;

        if let Ok(api_url) = std::env::var("GITHUB_API_URL") {
            config.github.api_url = api_url;
        }

        Ok(config)
    }
}
