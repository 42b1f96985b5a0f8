//! Unified path management for devdash files.
//!
//! All devdash configuration and session data lives under the platform
//! config directory (e.g. `~/.config/devdash/` on Linux).
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/devdash/
//! ├── config.toml      # Application configuration
//! └── session.json     # Persisted credential + user profile
//! ```

use devdash_core::error::{DevdashError, Result};
use std::path::PathBuf;

/// Unified path management for devdash.
pub struct DevdashPaths;

impl DevdashPaths {
    /// Returns the devdash configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/devdash/`)
    /// - `Err(DevdashError::Config)`: Could not determine the directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("devdash"))
            .ok_or_else(|| DevdashError::config("Cannot find configuration directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session file.
    ///
    /// # Security Note
    ///
    /// The file holds the bearer credential; it is written with 600
    /// permissions on Unix systems.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = DevdashPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("devdash"));
    }

    #[test]
    fn test_config_file() {
        let config_file = DevdashPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = DevdashPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_session_file() {
        let session_file = DevdashPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.json"));
        let config_dir = DevdashPaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }
}
