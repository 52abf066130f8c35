//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool wraps one GitHub Gist API operation.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool catalog and dispatch
//! - `client.rs` - Shared GitHub API client and upstream error mapping
//! - `model.rs` - Upstream response shapes
//! - `error.rs` - Tool-specific error taxonomy
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/gists/` (e.g., `my_tool.rs`)
//! 2. Define a params struct and `execute()`
//! 3. Export in `definitions/gists/mod.rs`
//! 4. Register in `registry.rs` (catalog and dispatch arms)

pub mod client;
pub mod definitions;
mod error;
pub mod model;
mod registry;

pub use client::GistClient;
pub use error::ToolError;
pub use registry::ToolRegistry;
