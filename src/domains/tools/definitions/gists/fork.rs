//! Fork a gist.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::tools::model::Gist;
use crate::domains::tools::{GistClient, ToolError};

use super::common::{pretty_result, require_gist_id};

/// Parameters for the fork_gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ForkGistParams {
    #[schemars(description = "The ID of the gist to fork")]
    pub gist_id: String,
}

/// Projection of the newly created fork.
#[derive(Debug, Clone, Serialize)]
pub struct ForkGistResult {
    /// ID of the fork, distinct from the source gist's id.
    pub id: String,
    pub url: String,
    pub owner: Option<String>,
    pub message: String,
}

/// Fork Gist Tool implementation.
#[derive(Debug, Clone)]
pub struct ForkGistTool;

impl ForkGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fork_gist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fork a gist";

    /// Execute the tool: validate, then one POST to the forks resource.
    pub async fn execute(
        params: ForkGistParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        require_gist_id(&params.gist_id)?;
        info!("Forking gist {}", params.gist_id);

        let fork: Gist = client
            .post_json(&format!("/gists/{}/forks", params.gist_id), None)
            .await?;

        pretty_result(&Self::project(fork))
    }

    /// Project the upstream fork record.
    pub fn project(fork: Gist) -> ForkGistResult {
        ForkGistResult {
            id: fork.id,
            url: fork.html_url,
            owner: fork.owner.map(|o| o.login),
            message: "Gist forked successfully".to_string(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ForkGistParams>(),
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
        let result: Result<ForkGistParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_project_fork() {
        let fork: Gist = serde_json::from_str(
            r#"{
                "id": "fork456",
                "html_url": "https://gist.github.com/fork456",
                "description": null,
                "public": true,
                "owner": { "login": "alice" },
                "files": {},
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        let result = ForkGistTool::project(fork);
        assert_eq!(result.id, "fork456");
        assert_eq!(result.owner.as_deref(), Some("alice"));
        assert_eq!(result.message, "Gist forked successfully");

        // The owner field stays present (null) even without an owner.
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("owner").is_some());
    }
}
