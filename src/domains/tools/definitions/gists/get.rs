//! Get a single gist by ID, with expanded file contents.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::tools::model::Gist;
use crate::domains::tools::{GistClient, ToolError};

use super::common::{describe, owner_login, pretty_result, require_gist_id};

/// Parameters for the get_gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGistParams {
    #[schemars(description = "The ID of the gist to retrieve")]
    pub gist_id: String,
}

/// Full projection of a single gist.
#[derive(Debug, Clone, Serialize)]
pub struct GistDetail {
    pub id: String,
    pub description: String,
    pub public: bool,
    pub owner: String,
    pub files: Vec<GistFileDetail>,
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
    pub forks: usize,
    pub comments: u64,
}

/// One expanded file entry.
#[derive(Debug, Clone, Serialize)]
pub struct GistFileDetail {
    pub filename: String,
    pub language: Option<String>,
    pub size: Option<u64>,
    pub content: Option<String>,
}

/// Get Gist Tool implementation.
#[derive(Debug, Clone)]
pub struct GetGistTool;

impl GetGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_gist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a single gist by ID";

    /// Execute the tool: one GET, projected to the full detail shape.
    pub async fn execute(
        params: GetGistParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        require_gist_id(&params.gist_id)?;
        info!("Fetching gist {}", params.gist_id);

        let gist: Gist = client
            .get_json(&format!("/gists/{}", params.gist_id), &[])
            .await?;

        pretty_result(&Self::project(gist))
    }

    /// Project the upstream record into the detail shape.
    pub fn project(gist: Gist) -> GistDetail {
        let files = gist
            .files
            .into_iter()
            .map(|(filename, file)| GistFileDetail {
                filename,
                language: file.language,
                size: file.size,
                content: file.content,
            })
            .collect();

        GistDetail {
            id: gist.id,
            description: describe(gist.description),
            public: gist.public,
            owner: owner_login(gist.owner.as_ref()),
            files,
            created_at: gist.created_at,
            updated_at: gist.updated_at,
            url: gist.html_url,
            forks: gist.forks.map(|f| f.len()).unwrap_or(0),
            comments: gist.comments,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetGistParams>(),
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
        let result: Result<GetGistParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_project_expands_files() {
        let gist: Gist = serde_json::from_str(
            r#"{
                "id": "aa5a315d61ae9438b18d",
                "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
                "description": "Hello World Examples",
                "public": true,
                "owner": { "login": "octocat" },
                "files": {
                    "x.py": {
                        "language": "Python",
                        "size": 9,
                        "content": "print(1)"
                    }
                },
                "created_at": "2010-04-14T02:15:15Z",
                "updated_at": "2011-06-20T11:34:15Z",
                "comments": 3,
                "forks": [{}, {}]
            }"#,
        )
        .unwrap();

        let detail = GetGistTool::project(gist);
        assert_eq!(detail.files.len(), 1);
        let file = &detail.files[0];
        assert_eq!(file.filename, "x.py");
        assert_eq!(file.language.as_deref(), Some("Python"));
        assert_eq!(file.size, Some(9));
        assert_eq!(file.content.as_deref(), Some("print(1)"));
        assert_eq!(detail.forks, 2);
        assert_eq!(detail.comments, 3);
        assert_eq!(detail.owner, "octocat");
    }

    #[test]
    fn test_project_defaults_for_sparse_gist() {
        let gist: Gist = serde_json::from_str(
            r#"{
                "id": "abc123",
                "html_url": "https://gist.github.com/abc123",
                "description": null,
                "public": false,
                "owner": null,
                "files": {},
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2020-01-02T00:00:00Z"
            }"#,
        )
        .unwrap();

        let detail = GetGistTool::project(gist);
        assert_eq!(detail.description, "No description");
        assert_eq!(detail.owner, "anonymous");
        assert_eq!(detail.forks, 0);
        assert_eq!(detail.comments, 0);
    }
}
