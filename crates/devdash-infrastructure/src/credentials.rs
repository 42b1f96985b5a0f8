//! File-backed credential storage.
//!
//! Persists the session credential and user profile as a single JSON file
//! so both are always written and cleared together. The session store
//! writes this file before updating any in-memory state; a crash can at
//! worst observe "fully logged out", never a half-written pair.

use crate::paths::DevdashPaths;
use devdash_core::error::Result;
use devdash_core::gateway::{CredentialStorage, PersistedSession};
use std::fs;
use std::path::{Path, PathBuf};

/// Credential storage backed by `session.json` in the config directory.
pub struct FileCredentialStorage {
    path: PathBuf,
}

impl FileCredentialStorage {
    /// Creates a storage at the default location
    /// (`~/.config/devdash/session.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be
    /// determined.
    pub fn default_location() -> Result<Self> {
        Ok(Self {
            path: DevdashPaths::session_file()?,
        })
    }

    /// Creates a storage with a custom path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStorage for FileCredentialStorage {
    fn load(&self) -> Result<Option<PersistedSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    fn store(&self, session: &PersistedSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;

        // The file holds the bearer credential; restrict it to the user.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, permissions)?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devdash_core::user::UserProfile;
    use tempfile::TempDir;

    fn persisted() -> PersistedSession {
        PersistedSession {
            token: "opaque-token".to_string(),
            user: UserProfile {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@x.com".to_string(),
            },
        }
    }

    fn storage_in(dir: &TempDir) -> FileCredentialStorage {
        FileCredentialStorage::with_path(dir.path().join("session.json"))
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.store(&persisted()).unwrap();
        let loaded = storage.load().unwrap().unwrap();

        assert_eq!(loaded, persisted());
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.store(&persisted()).unwrap();

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());

        // Clearing an empty store succeeds.
        storage.clear().unwrap();
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.path(), "not json").unwrap();

        assert!(storage.load().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_user_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.store(&persisted()).unwrap();

        let mode = fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
