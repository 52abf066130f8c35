//! Common utilities shared across gist tools.
//!
//! This module provides the list projection, shared argument validation,
//! pagination query assembly, and result formatting helpers.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::domains::tools::ToolError;
use crate::domains::tools::model::{Gist, GistOwner};

/// Display value when a gist carries no description. Always emitted so
/// callers can rely on the field being present.
pub const NO_DESCRIPTION: &str = "No description";

/// Display value when a gist has no owner.
pub const ANONYMOUS: &str = "anonymous";

/// Compact per-gist shape returned by the list operations.
///
/// `public` is emitted for the authenticated-user listing, `owner` for the
/// public and starred listings.
#[derive(Debug, Clone, Serialize)]
pub struct GistSummary {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Comma-joined filenames.
    pub files: String,
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
}

/// Confirmation payload for operations with no response body of interest.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    pub message: String,
    pub gist_id: String,
}

/// Project a gist from the authenticated-user listing (includes the public flag).
pub fn summarize_owned(gist: Gist) -> GistSummary {
    let files = join_filenames(&gist);
    GistSummary {
        public: Some(gist.public),
        owner: None,
        id: gist.id,
        description: describe(gist.description),
        files,
        created_at: gist.created_at,
        updated_at: gist.updated_at,
        url: gist.html_url,
    }
}

/// Project a gist from the public or starred listings (includes the owner).
pub fn summarize_public(gist: Gist) -> GistSummary {
    let files = join_filenames(&gist);
    GistSummary {
        public: None,
        owner: Some(owner_login(gist.owner.as_ref())),
        id: gist.id,
        description: describe(gist.description),
        files,
        created_at: gist.created_at,
        updated_at: gist.updated_at,
        url: gist.html_url,
    }
}

/// Description with the placeholder fallback applied.
pub fn describe(description: Option<String>) -> String {
    description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Owner login with the anonymous fallback applied.
pub fn owner_login(owner: Option<&GistOwner>) -> String {
    owner
        .map(|o| o.login.clone())
        .unwrap_or_else(|| ANONYMOUS.to_string())
}

fn join_filenames(gist: &Gist) -> String {
    gist.files.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Reject an empty gist identifier before the network call.
pub fn require_gist_id(gist_id: &str) -> Result<(), ToolError> {
    if gist_id.is_empty() {
        return Err(ToolError::invalid_arguments("gist_id is required"));
    }
    Ok(())
}

/// Default page size, matching the upstream API default.
pub fn default_per_page() -> u32 {
    30
}

/// Default page number.
pub fn default_page() -> u32 {
    1
}

/// Build the query string for the list operations.
///
/// `per_page` and `page` are always sent; `since` only when supplied.
pub fn pagination_query(
    since: Option<&str>,
    per_page: u32,
    page: u32,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("per_page", per_page.to_string()),
        ("page", page.to_string()),
    ];
    if let Some(since) = since {
        query.push(("since", since.to_string()));
    }
    query
}

/// Wrap a projected result as pretty-printed JSON text content.
pub fn pretty_result<T: Serialize>(value: &T) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ToolError::internal(format!("failed to encode result: {e}")))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
