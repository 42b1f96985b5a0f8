//! Application wiring.
//!
//! One context per invocation: configuration is read once, the session is
//! hydrated once from durable storage, and every command works against the
//! same client and session store.

use anyhow::{Result, bail};
use devdash_core::guard::{self, GateDecision};
use devdash_core::session::{SessionStore, TokenCell};
use devdash_core::user::UserProfile;
use devdash_infrastructure::{ApiClient, AppConfig, FileCredentialStorage};
use std::sync::Arc;

pub struct AppContext {
    pub config: AppConfig,
    pub client: Arc<ApiClient>,
    pub session: SessionStore,
}

impl AppContext {
    /// Loads configuration, builds the HTTP client, and restores any
    /// persisted session.
    pub fn init() -> Result<Self> {
        let config = AppConfig::load()?;
        let token_cell = TokenCell::new();
        let client = Arc::new(ApiClient::new(
            config.api_base_url.clone(),
            token_cell.clone(),
        )?);
        let storage = Arc::new(FileCredentialStorage::default_location()?);
        let mut session = SessionStore::new(client.clone(), storage, token_cell);
        session.bootstrap();
        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// Gate for commands that need an authenticated session.
    pub fn ensure_session(&self) -> Result<&UserProfile> {
        match guard::require_session(self.session.session()) {
            GateDecision::Allow => Ok(self
                .session
                .session()
                .user()
                .expect("authenticated session has a profile")),
            _ => bail!("Not logged in. Run `devdash login` first."),
        }
    }

    /// Gate for commands that need no session (login, signup).
    pub fn ensure_anonymous(&self) -> Result<()> {
        match guard::require_anonymous(self.session.session()) {
            GateDecision::Allow => Ok(()),
            _ => {
                let name = self
                    .session
                    .session()
                    .user()
                    .map(|user| user.name.clone())
                    .unwrap_or_default();
                bail!("Already logged in as {name}. Run `devdash logout` first.")
            }
        }
    }
}
