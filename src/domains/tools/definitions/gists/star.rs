//! Star a gist.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{GistClient, ToolError};

use super::common::{OperationResult, pretty_result, require_gist_id};

/// Parameters for the star_gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StarGistParams {
    #[schemars(description = "The ID of the gist to star")]
    pub gist_id: String,
}

/// Star Gist Tool implementation.
#[derive(Debug, Clone)]
pub struct StarGistTool;

impl StarGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "star_gist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Star a gist";

    /// Execute the tool: validate, then one PUT with no body of interest.
    pub async fn execute(
        params: StarGistParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        require_gist_id(&params.gist_id)?;
        info!("Starring gist {}", params.gist_id);

        client
            .put(&format!("/gists/{}/star", params.gist_id))
            .await?;

        pretty_result(&OperationResult {
            message: "Gist starred successfully".to_string(),
            gist_id: params.gist_id,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<StarGistParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
