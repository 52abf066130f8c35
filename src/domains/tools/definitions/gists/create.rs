//! Create a new gist.

use std::collections::BTreeMap;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::domains::tools::model::Gist;
use crate::domains::tools::{GistClient, ToolError};

use super::common::pretty_result;

/// Parameters for the create_gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateGistParams {
    #[schemars(description = "Description of the gist")]
    pub description: Option<String>,

    /// Filename to content mapping; must contain at least one entry.
    #[schemars(
        description = "Files to include in the gist (object with filename as key and content as value)"
    )]
    pub files: BTreeMap<String, String>,

    #[schemars(description = "Whether the gist should be public")]
    #[serde(default)]
    pub public: bool,
}

/// Projection of the created gist.
#[derive(Debug, Clone, Serialize)]
pub struct CreateGistResult {
    pub id: String,
    pub url: String,
    /// Echoed upstream description; null when none was set.
    pub description: Option<String>,
    pub message: String,
}

/// Create Gist Tool implementation.
#[derive(Debug, Clone)]
pub struct CreateGistTool;

impl CreateGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_gist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new gist";

    /// Execute the tool: validate, then one POST.
    pub async fn execute(
        params: CreateGistParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        let body = Self::build_body(&params)?;
        info!("Creating gist with {} file(s)", params.files.len());

        let gist: Gist = client.post_json("/gists", Some(&body)).await?;

        pretty_result(&CreateGistResult {
            id: gist.id,
            url: gist.html_url,
            description: gist.description,
            message: "Gist created successfully".to_string(),
        })
    }

    /// Build the POST body, transforming `{filename: content}` into the
    /// upstream `{filename: {content}}` shape. Fails on an empty mapping.
    pub fn build_body(params: &CreateGistParams) -> Result<Value, ToolError> {
        if params.files.is_empty() {
            return Err(ToolError::invalid_arguments(
                "At least one file is required",
            ));
        }

        let mut body = Map::new();
        if let Some(description) = &params.description {
            body.insert("description".to_string(), json!(description));
        }
        body.insert("public".to_string(), json!(params.public));

        let files: Map<String, Value> = params
            .files
            .iter()
            .map(|(filename, content)| (filename.clone(), json!({ "content": content })))
            .collect();
        body.insert("files".to_string(), Value::Object(files));

        Ok(Value::Object(body))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateGistParams>(),
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
    fn test_missing_files_fails_decode() {
        let result: Result<CreateGistParams, _> =
            serde_json::from_str(r#"{ "description": "no files" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_files_rejected() {
        let params: CreateGistParams = serde_json::from_str(r#"{ "files": {} }"#).unwrap();
        let err = CreateGistTool::build_body(&params).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_public_defaults_to_false() {
        let params: CreateGistParams =
            serde_json::from_str(r#"{ "files": { "a.txt": "hi" } }"#).unwrap();
        assert!(!params.public);
    }

    #[test]
    fn test_body_wraps_content_and_omits_absent_description() {
        let params: CreateGistParams =
            serde_json::from_str(r#"{ "files": { "a.txt": "hi" } }"#).unwrap();
        let body = CreateGistTool::build_body(&params).unwrap();
        assert_eq!(body["files"]["a.txt"]["content"], "hi");
        assert_eq!(body["public"], false);
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_body_includes_description_when_present() {
        let params: CreateGistParams = serde_json::from_str(
            r#"{ "description": "demo", "public": true, "files": { "a.txt": "hi" } }"#,
        )
        .unwrap();
        let body = CreateGistTool::build_body(&params).unwrap();
        assert_eq!(body["description"], "demo");
        assert_eq!(body["public"], true);
    }
}
