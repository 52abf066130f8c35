//! Update an existing gist.
//!
//! Supports partial update: an omitted `description` leaves it unchanged
//! upstream, and a file entry with a null value marks that file for deletion.

use std::collections::BTreeMap;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::domains::tools::model::Gist;
use crate::domains::tools::{GistClient, ToolError};

use super::common::{pretty_result, require_gist_id};

/// Parameters for the update_gist tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateGistParams {
    #[schemars(description = "The ID of the gist to update")]
    pub gist_id: String,

    /// Absent leaves the description unchanged; an explicit null clears it
    /// upstream.
    #[schemars(description = "New description for the gist")]
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub description: Option<Option<String>>,

    /// Filename to new-content mapping; a null value deletes that file.
    #[schemars(
        description = "Files to update (object with filename as key and content as value, or null to delete)"
    )]
    pub files: Option<BTreeMap<String, Option<String>>>,
}

/// Keep "field absent" (None) distinguishable from "field explicitly null"
/// (Some(None)): serde only calls this when the key is present.
fn deserialize_explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Projection of the updated gist.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateGistResult {
    pub id: String,
    pub url: String,
    pub message: String,
}

/// Update Gist Tool implementation.
#[derive(Debug, Clone)]
pub struct UpdateGistTool;

impl UpdateGistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_gist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing gist";

    /// Execute the tool: validate, then one PATCH.
    pub async fn execute(
        params: UpdateGistParams,
        client: &GistClient,
    ) -> Result<CallToolResult, ToolError> {
        require_gist_id(&params.gist_id)?;
        info!("Updating gist {}", params.gist_id);

        let body = Self::build_body(&params);
        let gist: Gist = client
            .patch_json(&format!("/gists/{}", params.gist_id), &body)
            .await?;

        pretty_result(&UpdateGistResult {
            id: gist.id,
            url: gist.html_url,
            message: "Gist updated successfully".to_string(),
        })
    }

    /// Build the PATCH body. Only supplied fields are sent; file entries with
    /// a null value are passed through as null to signal deletion.
    pub fn build_body(params: &UpdateGistParams) -> Value {
        let mut body = Map::new();

        match &params.description {
            Some(Some(description)) => {
                body.insert("description".to_string(), json!(description));
            }
            Some(None) => {
                body.insert("description".to_string(), Value::Null);
            }
            None => {}
        }

        if let Some(files) = &params.files {
            let entries: Map<String, Value> = files
                .iter()
                .map(|(filename, content)| {
                    let value = match content {
                        Some(content) => json!({ "content": content }),
                        None => Value::Null,
                    };
                    (filename.clone(), value)
                })
                .collect();
            body.insert("files".to_string(), Value::Object(entries));
        }

        Value::Object(body)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateGistParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
