//! Read-only mirror of a third-party account's public repository listing.

use serde::{Deserialize, Serialize};

/// Public repository metadata as returned by the `/github/repos` endpoint.
///
/// Never mutated by this application and never persisted across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub stars: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<i64>,
    pub language: String,
    pub updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(
        default,
        rename = "isPrivate",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_private: Option<bool>,
}
