//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod gists;

pub use gists::{
    CreateGistTool, DeleteGistTool, ForkGistTool, GetGistTool, ListGistsTool,
    ListPublicGistsTool, ListStarredGistsTool, StarGistTool, UnstarGistTool, UpdateGistTool,
};
