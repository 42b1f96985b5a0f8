//! Resource domain model.
//!
//! A resource is a bookmarked link with a category. The `id`, `user_id`,
//! and `created_at` fields are assigned exclusively by the server.

use crate::collection::Identified;
use serde::{Deserialize, Serialize};

/// A bookmarked link belonging to the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub title: String,
    pub url: String,
    pub category: String,
    pub created_at: String,
}

/// The client-editable fields of a resource, sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    pub url: String,
    pub category: String,
}

impl Identified for Resource {
    fn id(&self) -> i64 {
        self.id
    }

    fn entity_type() -> &'static str {
        "resource"
    }
}
