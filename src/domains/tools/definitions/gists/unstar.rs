//! Unstar a gist.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{GistClient, ToolError};

use super::common::{OperationResult, pretty_result, require_gist_id};

/// Parameters for the unstar_gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UnstarGistParams {
    #[schemars(description = "The ID of the gist to unstar")]
    pub gist_id: String,
}

/// Unstar Gist Tool implementation.
#[derive(Debug, Clone)]
pub struct UnstarGistTool;

impl UnstarGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "unstar_gist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Unstar a gist";

    /// Execute the tool: validate, then one DELETE on the star resource.
    pub async fn execute(
        params: UnstarGistParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        require_gist_id(&params.gist_id)?;
        info!("Unstarring gist {}", params.gist_id);

        client
            .delete(&format!("/gists/{}/star", params.gist_id))
            .await?;

        pretty_result(&OperationResult {
            message: "Gist unstarred successfully".to_string(),
            gist_id: params.gist_id,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UnstarGistParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_gist_id_fails_decode() {
        let result: Result<UnstarGistParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
