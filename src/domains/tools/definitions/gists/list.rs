//! List gists for the authenticated user or a specific user.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::model::Gist;
use crate::domains::tools::{GistClient, ToolError};

use super::common::{
    GistSummary, default_page, default_per_page, pagination_query, pretty_result, summarize_owned,
};

/// Parameters for the list_gists tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListGistsParams {
    /// Target user; defaults to the authenticated user when absent.
    #[schemars(
        description = "Username to list gists for (optional, defaults to authenticated user)"
    )]
    pub username: Option<String>,

    #[schemars(description = "Only show gists updated after this time (ISO 8601 format)")]
    pub since: Option<String>,

    #[schemars(description = "Number of results per page (max 100)")]
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[schemars(description = "Page number to retrieve")]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// List Gists Tool implementation.
#[derive(Debug, Clone)]
pub struct ListGistsTool;

impl ListGistsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_gists";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all gists for the authenticated user or a specific user";

    /// Select the endpoint: per-user when a username is given, otherwise the
    /// authenticated user's gists.
    pub fn endpoint(username: Option<&str>) -> String {
        match username {
            Some(user) if !user.is_empty() => format!("/users/{}/gists", user),
            _ => "/gists".to_string(),
        }
    }

    /// Execute the tool: one GET, projected to summaries.
    pub async fn execute(
        params: ListGistsParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        let endpoint = Self::endpoint(params.username.as_deref());
        info!("Listing gists from {}", endpoint);

        let query = pagination_query(params.since.as_deref(), params.per_page, params.page);
        let gists: Vec<Gist> = client.get_json(&endpoint, &query).await?;

        let summaries: Vec<GistSummary> = gists.into_iter().map(summarize_owned).collect();
        pretty_result(&summaries)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListGistsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
