//! Goal domain model.
//!
//! A goal is a text item with a progress percentage and a due date. As with
//! resources, `id`, `user_id`, and `created_at` come from the server.

use crate::collection::Identified;
use serde::{Deserialize, Serialize};

/// A tracked goal belonging to the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub text: String,
    pub progress: u8,
    pub due_date: String,
    pub created_at: String,
}

/// The client-editable fields of a goal, sent on create and update.
///
/// `progress` is expected to already be within [0, 100]; the input surface
/// clamps it via [`clamp_progress`] before building a draft. The store and
/// the server contract perform no further client-side validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub text: String,
    pub progress: u8,
    pub due_date: String,
}

/// Clamps a raw progress value to the valid [0, 100] range.
pub fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

impl Identified for Goal {
    fn id(&self) -> i64 {
        self.id
    }

    fn entity_type() -> &'static str {
        "goal"
    }
}
