//! Upstream response shapes for the GitHub Gist API.
//!
//! Only the fields the projections need are decoded; everything else in the
//! upstream payload is ignored. List responses omit file contents, so the
//! content-bearing fields are optional.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One gist record as returned by the GitHub API.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub public: bool,
    pub owner: Option<GistOwner>,
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub html_url: String,
    /// Comment count; present on single-gist responses.
    #[serde(default)]
    pub comments: u64,
    /// Fork records; only populated on single-gist responses.
    pub forks: Option<Vec<serde_json::Value>>,
}

/// The owning user of a gist. Absent for anonymous gists.
#[derive(Debug, Clone, Deserialize)]
pub struct GistOwner {
    pub login: String,
}

/// One file entry inside a gist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GistFile {
    pub language: Option<String>,
    pub size: Option<u64>,
    /// Full content; omitted in list responses.
    pub content: Option<String>,
}
