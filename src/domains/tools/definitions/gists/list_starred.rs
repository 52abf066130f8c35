//! List starred gists for the authenticated user.

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

/// Parameters for the list_starred_gists tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListStarredGistsParams {
    #[schemars(description = "Only show gists updated after this time (ISO 8601 format)")]
    pub since: Option<String>,

    #[schemars(description = "Number of results per page (max 100)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[schemars(description = "Page number to retrieve")]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// List Starred Gists Tool implementation.
#[derive(Debug, Clone)]
pub struct ListStarredGistsTool;

impl ListStarredGistsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_starred_gists";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all starred gists for the authenticated user";

    /// Execute the tool: one GET, projected to summaries with owner logins.
    pub async fn execute(
        params: ListStarredGistsParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        info!("Listing starred gists");

        let query = pagination_query(params.since.as_deref(), params.per_page, params.page);
        let gists: Vec<Gist> = client.get_json("/gists/starred", &query).await?;

        let summaries: Vec<GistSummary> = gists.into_iter().map(summarize_public).collect();
        pretty_result(&summaries)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListStarredGistsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
