//! Gists MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! GitHub's Gist API as a set of callable tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the ten gist tools, the registry/dispatcher that routes
//!     invocations to them, and the GitHub API client they share
//!
//! # Example
//!
//! ```rust,no_run
//! use gists_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
