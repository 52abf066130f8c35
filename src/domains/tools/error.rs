//! Tool-specific error types.
//!
//! One variant per caller-facing error kind. Validation failures (unknown
//! tool, missing required field) are raised before any network I/O; the
//! remaining kinds translate upstream HTTP and network failures.

use rmcp::ErrorData as McpError;
use rmcp::model::ErrorCode;
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The GitHub token was rejected (HTTP 401).
    #[error("Invalid GitHub token")]
    InvalidCredential,

    /// The gist or user does not exist (HTTP 404).
    #[error("Resource not found")]
    NotFound,

    /// Access denied or rate-limited (HTTP 403); upstream message passed through.
    #[error("GitHub API error: {0}")]
    Forbidden(String),

    /// Any other upstream HTTP failure; upstream message passed through.
    #[error("GitHub API error: {0}")]
    Upstream(String),

    /// No HTTP response was received.
    #[error("Network error while connecting to GitHub: {0}")]
    Network(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Map tool errors onto JSON-RPC error codes for the MCP caller.
impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        let code = match err {
            ToolError::UnknownTool(_) => ErrorCode::METHOD_NOT_FOUND,
            ToolError::InvalidArguments(_) => ErrorCode::INVALID_PARAMS,
            ToolError::InvalidCredential | ToolError::NotFound | ToolError::Forbidden(_) => {
                ErrorCode::INVALID_REQUEST
            }
            ToolError::Upstream(_) | ToolError::Network(_) | ToolError::Internal(_) => {
                ErrorCode::INTERNAL_ERROR
            }
        };
        McpError::new(code, message, None)
    }
}
