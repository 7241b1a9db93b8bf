use crate::api::{ApiResult, NotesGateway};
use crate::models::{Credentials, Registration, User};
use crate::storage::{KeyValueStore, SharedStore, TOKEN_KEY};

/// Who is signed in, and whether that is still being worked out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SessionState {
    /// True until the stored credential has been checked on startup.
    pub initializing: bool,
    pub user: Option<User>,
}

impl SessionState {
    pub fn initializing() -> Self {
        Self {
            initializing: true,
            user: None,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            initializing: false,
            user: Some(user),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            initializing: false,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initializing()
    }
}

/// Owns the persisted access token and keeps the gateway's copy in step.
#[derive(Clone)]
pub(crate) struct SessionStore {
    store: SharedStore,
}

impl SessionStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn stored_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// Resolves the stored credential to a user. Any failure discards the
    /// credential and leaves the gateway anonymous.
    pub async fn initialize<G: NotesGateway>(&self, gateway: &mut G) -> Option<User> {
        let Some(token) = self.stored_token() else {
            gateway.clear_token();
            return None;
        };

        gateway.set_token(token);
        match gateway.current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "session restored");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored credential rejected, discarding");
                self.store.remove(TOKEN_KEY);
                gateway.clear_token();
                None
            }
        }
    }

    /// Exchanges credentials for a token and resolves the user. The token is
    /// persisted only once the user is known; on any failure the previous
    /// session (gateway token and stored credential) is left as it was.
    pub async fn login<G: NotesGateway + Clone>(
        &self,
        gateway: &mut G,
        credentials: &Credentials,
    ) -> ApiResult<User> {
        let token = gateway.login(credentials).await?;

        let mut candidate = gateway.clone();
        candidate.set_token(token.clone());
        let user = candidate.current_user().await?;

        self.store.set(TOKEN_KEY, &token);
        *gateway = candidate;
        tracing::info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// Creates an account. Does not sign in.
    pub async fn register<G: NotesGateway>(
        &self,
        gateway: &G,
        registration: &Registration,
    ) -> ApiResult<()> {
        gateway.register(registration).await?;
        tracing::info!(email = registration.email(), "account registered");
        Ok(())
    }

    /// Drops the credential locally. No network call.
    pub fn logout<G: NotesGateway>(&self, gateway: &mut G) {
        self.store.remove(TOKEN_KEY);
        gateway.clear_token();
        tracing::info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiErrorKind, LocalGateway};
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use std::sync::Arc;

    fn setup() -> (SessionStore, LocalGateway, SharedStore) {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let session = SessionStore::new(store.clone());
        let gateway = LocalGateway::new(store.clone());
        (session, gateway, store)
    }

    fn register_ann(session: &SessionStore, gw: &LocalGateway) {
        let reg = Registration::new("Ann", "ann@x.com", "secret1", "secret1").expect("valid");
        block_on(session.register(gw, &reg)).expect("register");
    }

    #[test]
    fn test_session_state_defaults_to_initializing() {
        let s = SessionState::default();
        assert!(s.initializing);
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_initialize_without_token_is_anonymous() {
        let (session, mut gw, _) = setup();
        assert!(block_on(session.initialize(&mut gw)).is_none());
        assert!(!gw.is_authenticated());
    }

    #[test]
    fn test_login_persists_token_and_initialize_restores_it() {
        let (session, mut gw, store) = setup();
        register_ann(&session, &gw);

        let user = block_on(session.login(&mut gw, &Credentials::new("ann@x.com", "secret1")))
            .expect("login");
        assert_eq!(user.name, "Ann");
        assert!(gw.is_authenticated());
        assert!(store.get(TOKEN_KEY).is_some());

        let mut fresh = LocalGateway::new(store.clone());
        let restored = block_on(session.initialize(&mut fresh)).expect("restored");
        assert_eq!(restored, user);
    }

    #[test]
    fn test_wrong_password_leaves_session_unchanged() {
        let (session, mut gw, store) = setup();
        register_ann(&session, &gw);
        block_on(session.login(&mut gw, &Credentials::new("ann@x.com", "secret1")))
            .expect("login");
        let before = store.get(TOKEN_KEY);

        let err = block_on(session.login(&mut gw, &Credentials::new("ann@x.com", "wrong")))
            .unwrap_err();
        assert!(!err.message.is_empty());
        assert_eq!(store.get(TOKEN_KEY), before);
        assert!(gw.is_authenticated());
        assert!(block_on(gw.current_user()).is_ok());
    }

    #[test]
    fn test_rejected_stored_token_is_discarded() {
        let (session, mut gw, store) = setup();
        store.set(TOKEN_KEY, "token-stale");

        assert!(block_on(session.initialize(&mut gw)).is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(!gw.is_authenticated());
    }

    #[test]
    fn test_logout_is_synchronous_and_clears_token() {
        let (session, mut gw, store) = setup();
        register_ann(&session, &gw);
        block_on(session.login(&mut gw, &Credentials::new("ann@x.com", "secret1")))
            .expect("login");

        session.logout(&mut gw);
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(!gw.is_authenticated());
        assert_eq!(
            block_on(gw.list_active()).unwrap_err().kind,
            ApiErrorKind::Unauthorized
        );
    }
}
