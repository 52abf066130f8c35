//! List all public gists.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::model::Gist;
use crate::domains::tools::{GistClient, ToolError};

use super::common::{
    GistSummary, default_page, default_per_page, pagination_query, pretty_result,
    summarize_public,
};

/// Parameters for the list_public_gists tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListPublicGistsParams {
    #[schemars(description = "Only show gists updated after this time (ISO 8601 format)")]
    pub since: Option<String>,

    #[schemars(description = "Number of results per page (max 100)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[schemars(description = "Page number to retrieve")]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// List Public Gists Tool implementation.
#[derive(Debug, Clone)]
pub struct ListPublicGistsTool;

impl ListPublicGistsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_public_gists";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all public gists";

    /// Execute the tool: one GET, projected to summaries with owner logins.
    pub async fn execute(
        params: ListPublicGistsParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        info!("Listing public gists");

        let query = pagination_query(params.since.as_deref(), params.per_page, params.page);
        let gists: Vec<Gist> = client.get_json("/gists/public", &query).await?;

        let summaries: Vec<GistSummary> = gists.into_iter().map(summarize_public).collect();
        pretty_result(&summaries)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListPublicGistsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
