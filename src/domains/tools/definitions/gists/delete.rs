//! Delete a gist.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{GistClient, ToolError};

use super::common::{OperationResult, pretty_result, require_gist_id};

/// Parameters for the delete_gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteGistParams {
    #[schemars(description = "The ID of the gist to delete")]
    pub gist_id: String,
}

/// Delete Gist Tool implementation.
#[derive(Debug, Clone)]
pub struct DeleteGistTool;

impl DeleteGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_gist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a gist";

    /// Execute the tool: validate, then one DELETE with no body of interest.
    pub async fn execute(
        params: DeleteGistParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        require_gist_id(&params.gist_id)?;
        info!("Deleting gist {}", params.gist_id);

        client
            .delete(&format!("/gists/{}", params.gist_id))
            .await?;

        pretty_result(&OperationResult {
            message: "Gist deleted successfully".to_string(),
            gist_id: params.gist_id,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteGistParams>(),
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
        let result: Result<DeleteGistParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_gist_id_decodes() {
        let params: DeleteGistParams =
            serde_json::from_str(r#"{ "gist_id": "abc123" }"#).unwrap();
        assert_eq!(params.gist_id, "abc123");
    }
}
