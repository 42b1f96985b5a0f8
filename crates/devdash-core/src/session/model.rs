//! Session domain model.

use crate::user::UserProfile;

/// The pairing of credential and user profile representing "who is logged
/// in".
///
/// Invariant: the profile is present iff the token is present. The fields
/// are private and the only constructors set or clear both together, so the
/// invariant holds by construction; a session is replaced wholesale, never
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    user: Option<UserProfile>,
    token: Option<String>,
}

impl Session {
    /// An empty session: nobody is logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for the given profile and credential.
    pub fn authenticated(user: UserProfile, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    /// True when a credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The current user's profile, if logged in.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// The current bearer credential, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
