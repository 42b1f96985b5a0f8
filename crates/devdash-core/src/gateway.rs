//! Gateway traits.
//!
//! These traits are the seam between the stores and the outside world: the
//! HTTP transport (implemented by `devdash-infrastructure`) and the durable
//! credential storage. Stores depend only on these contracts, which keeps
//! them testable with in-memory doubles.

use crate::error::Result;
use crate::user::UserProfile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Successful login/signup response from the remote API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub message: String,
    pub user: UserProfile,
    pub token: String,
}

/// Authentication endpoints of the remote API.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Calls the login endpoint with the given credentials.
    async fn login(&self, email: &str, password: &str) -> Result<AuthPayload>;

    /// Calls the signup endpoint with the given profile fields.
    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<AuthPayload>;
}

/// Best-effort fetch of a third-party account's public repository listing.
#[async_trait]
pub trait RepoMirrorApi: Send + Sync {
    /// Lists the public repositories of `username`.
    async fn repos(&self, username: &str) -> Result<Vec<crate::github::RepoSummary>>;
}

/// The credential/profile pair written to durable storage.
///
/// Both fields are persisted and cleared together; durable storage never
/// holds one without the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: UserProfile,
}

/// Durable storage for the session credential and profile.
///
/// Implementations must write the pair as a single unit so that a crash or
/// reload can never observe a token without its profile (or vice versa).
pub trait CredentialStorage: Send + Sync {
    /// Reads the persisted session, if any.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<PersistedSession>>;

    /// Persists the session, replacing any previous one.
    fn store(&self, session: &PersistedSession) -> Result<()>;

    /// Removes the persisted session. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}
