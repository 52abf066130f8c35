//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for startup and infrastructure
//! failures. Per-invocation tool errors have their own type in the tools
//! domain and are surfaced to the caller instead of crashing the process.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors (missing credential, bad values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures while building the HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
