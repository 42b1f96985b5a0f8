//! Session store.

use crate::error::Result;
use crate::gateway::{AuthApi, AuthPayload, CredentialStorage, PersistedSession};
use crate::session::{Session, TokenCell};
use std::sync::Arc;

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";

/// Owns the current session and the single authoritative mutation path for
/// it (bootstrap, login, signup, logout).
///
/// Every mutation writes durable storage before in-memory state, and the
/// shared [`TokenCell`] before the session itself, so the HTTP gateway and
/// a reload can never observe a credential the store has already dropped.
pub struct SessionStore {
    auth: Arc<dyn AuthApi>,
    storage: Arc<dyn CredentialStorage>,
    token_cell: TokenCell,
    session: Session,
    loading: bool,
    error: Option<String>,
}

impl SessionStore {
    /// Creates an anonymous store. Call [`bootstrap`](Self::bootstrap) to
    /// restore a persisted session.
    pub fn new(
        auth: Arc<dyn AuthApi>,
        storage: Arc<dyn CredentialStorage>,
        token_cell: TokenCell,
    ) -> Self {
        Self {
            auth,
            storage,
            token_cell,
            session: Session::anonymous(),
            loading: false,
            error: None,
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The shared token cell this store keeps in lockstep with storage.
    pub fn token_cell(&self) -> &TokenCell {
        &self.token_cell
    }

    /// True while a login or signup attempt is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The user-facing message from the last failed attempt, if any.
    ///
    /// Not cleared automatically at the start of an attempt; callers
    /// dismiss it explicitly via [`clear_error`](Self::clear_error).
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismisses the stored error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Restores the session persisted by a previous run, if any.
    ///
    /// No network call. Unreadable or corrupt storage is logged and treated
    /// as "fully logged out" rather than raised.
    pub fn bootstrap(&mut self) {
        match self.storage.load() {
            Ok(Some(persisted)) => {
                self.token_cell.set(Some(persisted.token.clone()));
                self.session = Session::authenticated(persisted.user, persisted.token);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, "failed to restore persisted session");
            }
        }
    }

    /// Authenticates with the login endpoint.
    ///
    /// On success the session is persisted and set atomically; on failure a
    /// user-facing message is stored and the error is re-raised so the
    /// caller can react as well.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.loading = true;
        let outcome = self.auth.login(email, password).await;
        self.finish_attempt(outcome, LOGIN_FALLBACK)
    }

    /// Authenticates with the signup endpoint. Same contract as
    /// [`login`](Self::login).
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<()> {
        self.loading = true;
        let outcome = self.auth.signup(name, email, password).await;
        self.finish_attempt(outcome, SIGNUP_FALLBACK)
    }

    /// Clears durable storage and the in-memory session unconditionally.
    ///
    /// No network call; idempotent; cannot fail by contract. A storage
    /// clear error is logged and swallowed so logout always succeeds.
    pub fn logout(&mut self) {
        if let Err(err) = self.storage.clear() {
            tracing::warn!(%err, "failed to clear persisted session");
        }
        self.token_cell.set(None);
        self.session = Session::anonymous();
    }

    fn finish_attempt(&mut self, outcome: Result<AuthPayload>, fallback: &str) -> Result<()> {
        let result = match outcome {
            Ok(payload) => self.apply_payload(payload),
            Err(err) => Err(err),
        };
        if let Err(ref err) = result {
            self.error = Some(err.user_message(fallback));
        }
        self.loading = false;
        result
    }

    /// Persists and sets the session. Storage is written first; the shared
    /// token cell second; the in-memory session last.
    fn apply_payload(&mut self, payload: AuthPayload) -> Result<()> {
        let persisted = PersistedSession {
            token: payload.token.clone(),
            user: payload.user.clone(),
        };
        self.storage.store(&persisted)?;
        self.token_cell.set(Some(payload.token.clone()));
        self.session = Session::authenticated(payload.user, payload.token);
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevdashError;
    use crate::user::UserProfile;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory stand-in for the auth endpoints.
    struct FakeAuthApi {
        fail_with: Mutex<Option<DevdashError>>,
    }

    impl FakeAuthApi {
        fn ok() -> Self {
            Self {
                fail_with: Mutex::new(None),
            }
        }

        fn failing(err: DevdashError) -> Self {
            Self {
                fail_with: Mutex::new(Some(err)),
            }
        }

        fn payload(name: &str, email: &str) -> AuthPayload {
            AuthPayload {
                message: "ok".to_string(),
                user: UserProfile {
                    id: 1,
                    name: name.to_string(),
                    email: email.to_string(),
                },
                token: format!("token-for-{email}"),
            }
        }
    }

    #[async_trait]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, email: &str, _password: &str) -> Result<AuthPayload> {
            if let Some(err) = self.fail_with.lock().unwrap().take() {
                return Err(err);
            }
            Ok(Self::payload("Ada", email))
        }

        async fn signup(&self, name: &str, email: &str, _password: &str) -> Result<AuthPayload> {
            if let Some(err) = self.fail_with.lock().unwrap().take() {
                return Err(err);
            }
            Ok(Self::payload(name, email))
        }
    }

    /// In-memory credential storage.
    #[derive(Default)]
    struct MemoryStorage {
        slot: Mutex<Option<PersistedSession>>,
    }

    impl CredentialStorage for MemoryStorage {
        fn load(&self) -> Result<Option<PersistedSession>> {
            Ok(self.slot.lock().unwrap().clone())
        }

        fn store(&self, session: &PersistedSession) -> Result<()> {
            *self.slot.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    fn store_with(auth: FakeAuthApi, storage: Arc<MemoryStorage>) -> SessionStore {
        SessionStore::new(Arc::new(auth), storage, TokenCell::new())
    }

    #[tokio::test]
    async fn test_login_then_bootstrap_restores_identical_session() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = store_with(FakeAuthApi::ok(), storage.clone());

        store.login("ada@x.com", "secret1").await.unwrap();
        let logged_in = store.session().clone();
        assert!(logged_in.is_authenticated());

        // Simulated reload: a fresh store over the same storage.
        let mut reloaded = store_with(FakeAuthApi::ok(), storage);
        reloaded.bootstrap();

        assert_eq!(reloaded.session(), &logged_in);
    }

    #[tokio::test]
    async fn test_signup_sets_profile_and_persists() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = store_with(FakeAuthApi::ok(), storage.clone());

        store.signup("Ada", "ada@x.com", "secret1").await.unwrap();

        assert_eq!(store.session().user().unwrap().name, "Ada");
        let persisted = storage.load().unwrap().unwrap();
        assert_eq!(persisted.user.name, "Ada");
        assert_eq!(store.token_cell().get().as_deref(), store.session().token());
    }

    #[tokio::test]
    async fn test_bootstrap_with_empty_storage_stays_anonymous() {
        let mut store = store_with(FakeAuthApi::ok(), Arc::new(MemoryStorage::default()));
        store.bootstrap();
        assert!(!store.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = store_with(FakeAuthApi::ok(), storage.clone());
        store.login("ada@x.com", "secret1").await.unwrap();

        store.logout();
        assert!(!store.session().is_authenticated());
        assert!(storage.load().unwrap().is_none());
        assert_eq!(store.token_cell().get(), None);

        // Second logout has the same effect as the first.
        store.logout();
        assert!(!store.session().is_authenticated());
        assert!(storage.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_stores_server_message_and_reraises() {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = store_with(
            FakeAuthApi::failing(DevdashError::transport(401, "Invalid credentials")),
            storage.clone(),
        );

        let err = store.login("ada@x.com", "wrong").await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(store.error(), Some("Invalid credentials"));
        assert!(!store.session().is_authenticated());
        assert!(storage.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_without_server_message_uses_fallback() {
        let mut store = store_with(
            FakeAuthApi::failing(DevdashError::network("connection refused")),
            Arc::new(MemoryStorage::default()),
        );

        store.login("ada@x.com", "pw").await.unwrap_err();

        assert_eq!(store.error(), Some("Login failed. Please try again."));
    }

    #[tokio::test]
    async fn test_error_survives_until_cleared() {
        let mut store = store_with(
            FakeAuthApi::failing(DevdashError::transport(401, "Invalid credentials")),
            Arc::new(MemoryStorage::default()),
        );
        store.login("ada@x.com", "wrong").await.unwrap_err();
        assert!(store.error().is_some());

        store.clear_error();
        assert!(store.error().is_none());
    }
}
