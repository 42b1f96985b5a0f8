//! Application configuration.
//!
//! Configuration is read once at process start from
//! `~/.config/devdash/config.toml`, with environment variables taking
//! precedence over file values:
//!
//! - `DEVDASH_API_URL` overrides `api_base_url`
//! - `DEVDASH_GITHUB_USERNAME` overrides `github_username`

use crate::paths::DevdashPaths;
use devdash_core::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Base URL used when neither the config file nor the environment
/// specifies one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the remote API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Account whose public repositories the dashboard mirrors.
    /// The mirror panel is skipped when unset.
    #[serde(default)]
    pub github_username: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            github_username: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the default file location and applies
    /// environment overrides.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        let path = DevdashPaths::config_file()?;
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.apply_overrides(
            env::var("DEVDASH_API_URL").ok(),
            env::var("DEVDASH_GITHUB_USERNAME").ok(),
        );
        Ok(config)
    }

    /// Applies environment-style overrides on top of file values.
    pub fn apply_overrides(
        &mut self,
        api_base_url: Option<String>,
        github_username: Option<String>,
    ) {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(username) = github_username {
            self.github_username = Some(username);
        }
    }
}
