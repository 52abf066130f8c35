//! Tool Registry - central catalog and dispatch for all gist tools.
//!
//! This module provides:
//! - The catalog of tool metadata reported to `tools/list`
//! - Dispatch by exact name for `tools/call`
//!
//! Arguments are decoded into each tool's typed params struct before its
//! handler runs, so missing required fields fail here, before any network
//! call is issued.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::client::GistClient;
use super::definitions::{
    CreateGistTool, DeleteGistTool, ForkGistTool, GetGistTool, ListGistsTool,
    ListPublicGistsTool, ListStarredGistsTool, StarGistTool, UnstarGistTool, UpdateGistTool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<GistClient>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the configured GitHub client.
    pub fn new(client: Arc<GistClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListGistsTool::NAME,
            ListPublicGistsTool::NAME,
            ListStarredGistsTool::NAME,
            GetGistTool::NAME,
            CreateGistTool::NAME,
            UpdateGistTool::NAME,
            DeleteGistTool::NAME,
            StarGistTool::NAME,
            UnstarGistTool::NAME,
            ForkGistTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListGistsTool::to_tool(),
            ListPublicGistsTool::to_tool(),
            ListStarredGistsTool::to_tool(),
            GetGistTool::to_tool(),
            CreateGistTool::to_tool(),
            UpdateGistTool::to_tool(),
            DeleteGistTool::to_tool(),
            StarGistTool::to_tool(),
            UnstarGistTool::to_tool(),
            ForkGistTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let client = self.client.as_ref();
        match name {
            ListGistsTool::NAME => {
                ListGistsTool::execute(parse_params(arguments)?, client).await
            }
            ListPublicGistsTool::NAME => {
                ListPublicGistsTool::execute(parse_params(arguments)?, client).await
            }
            ListStarredGistsTool::NAME => {
                ListStarredGistsTool::execute(parse_params(arguments)?, client).await
            }
            GetGistTool::NAME => GetGistTool::execute(parse_params(arguments)?, client).await,
            CreateGistTool::NAME => {
                CreateGistTool::execute(parse_params(arguments)?, client).await
            }
            UpdateGistTool::NAME => {
                UpdateGistTool::execute(parse_params(arguments)?, client).await
            }
            DeleteGistTool::NAME => {
                DeleteGistTool::execute(parse_params(arguments)?, client).await
            }
            StarGistTool::NAME => StarGistTool::execute(parse_params(arguments)?, client).await,
            UnstarGistTool::NAME => {
                UnstarGistTool::execute(parse_params(arguments)?, client).await
            }
            ForkGistTool::NAME => ForkGistTool::execute(parse_params(arguments)?, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}

/// Decode the argument bag into a tool's typed params struct.
fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn test_registry() -> ToolRegistry {
        let client = GistClient::new(&Config::default().github).unwrap();
        ToolRegistry::new(Arc::new(client))
    }

    fn args(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"list_gists"));
        assert!(names.contains(&"list_public_gists"));
        assert!(names.contains(&"list_starred_gists"));
        assert!(names.contains(&"get_gist"));
        assert!(names.contains(&"create_gist"));
        assert!(names.contains(&"update_gist"));
        assert!(names.contains(&"delete_gist"));
        assert!(names.contains(&"star_gist"));
        assert!(names.contains(&"unstar_gist"));
        assert!(names.contains(&"fork_gist"));
    }

    #[test]
    fn test_catalog_matches_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());
        for tool in &tools {
            assert!(names.contains(&tool.name.as_ref()));
            assert!(tool.description.is_some());
        }
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let registry = test_registry();
        let err = registry.dispatch("unknown", args("{}")).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(_)));
    }

    #[tokio::test]
    async fn test_dispatch_missing_gist_id() {
        let registry = test_registry();
        for name in ["get_gist", "update_gist", "delete_gist", "star_gist", "unstar_gist", "fork_gist"] {
            let err = registry.dispatch(name, args("{}")).await.unwrap_err();
            assert!(
                matches!(err, ToolError::InvalidArguments(ref msg) if msg.contains("gist_id")),
                "{} should reject missing gist_id, got {:?}",
                name,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_dispatch_empty_gist_id() {
        let registry = test_registry();
        let err = registry
            .dispatch("get_gist", args(r#"{ "gist_id": "" }"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_dispatch_create_empty_files() {
        let registry = test_registry();
        let err = registry
            .dispatch("create_gist", args(r#"{ "files": {} }"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_dispatch_create_absent_files() {
        let registry = test_registry();
        let err = registry
            .dispatch("create_gist", args(r#"{ "description": "d" }"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
