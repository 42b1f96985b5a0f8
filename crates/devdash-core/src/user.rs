//! User profile domain model.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of the authenticated user, received from the API at
/// login/signup time. Not independently refreshable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}
