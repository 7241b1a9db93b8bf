//! Notes gateway: the seam between the UI and wherever notes live.
//!
//! Every operation resolves to an [`ApiResult`]; `Ok(data)` is the
//! `{error: false, data}` outcome and `Err(ApiError)` the
//! `{error: true, message}` one. Nothing here panics or retries.

mod local;
mod remote;

pub(crate) use local::LocalGateway;
pub(crate) use remote::ApiClient;

use crate::config::{BackendKind, EnvConfig};
use crate::models::{Credentials, NewNote, Note, Registration, User};
use crate::storage::SharedStore;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    /// The backend answered with a non-success envelope.
    Rejected,
    NotFound,
    Parse,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            match kind {
                ApiErrorKind::Unauthorized => "Unauthorized".to_string(),
                ApiErrorKind::Network => "Network error".to_string(),
                ApiErrorKind::Rejected => "Request failed".to_string(),
                ApiErrorKind::NotFound => "Not found".to_string(),
                ApiErrorKind::Parse => "Unexpected response".to_string(),
            }
        } else {
            message
        };
        Self { kind, message }
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, message)
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Rejected, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self::new(ApiErrorKind::Parse, e.to_string())
    }

    pub(crate) fn network(e: impl std::fmt::Display) -> Self {
        Self::new(ApiErrorKind::Network, e.to_string())
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Auth and notes operations shared by every backend.
///
/// The access token is handed in by the session store; gateways never
/// persist it themselves.
pub(crate) trait NotesGateway {
    fn set_token(&mut self, token: String);
    fn clear_token(&mut self);
    fn is_authenticated(&self) -> bool;

    async fn register(&self, registration: &Registration) -> ApiResult<()>;
    /// Returns the access token.
    async fn login(&self, credentials: &Credentials) -> ApiResult<String>;
    async fn current_user(&self) -> ApiResult<User>;

    async fn list_active(&self) -> ApiResult<Vec<Note>>;
    async fn list_archived(&self) -> ApiResult<Vec<Note>>;
    async fn get_note(&self, id: &str) -> ApiResult<Note>;
    async fn create_note(&self, note: &NewNote) -> ApiResult<Note>;
    async fn archive_note(&self, id: &str) -> ApiResult<()>;
    async fn unarchive_note(&self, id: &str) -> ApiResult<()>;
    async fn delete_note(&self, id: &str) -> ApiResult<()>;
}

/// The backend selected at startup.
#[derive(Clone)]
pub(crate) enum Backend {
    Remote(ApiClient),
    Local(LocalGateway),
}

impl Backend {
    pub fn from_config(config: &EnvConfig, store: SharedStore) -> Self {
        match config.backend {
            BackendKind::Remote => Backend::Remote(ApiClient::new(config.api_url.clone())),
            BackendKind::Local => Backend::Local(LocalGateway::new(store)),
        }
    }
}

impl NotesGateway for Backend {
    fn set_token(&mut self, token: String) {
        match self {
            Backend::Remote(c) => c.set_token(token),
            Backend::Local(l) => l.set_token(token),
        }
    }

    fn clear_token(&mut self) {
        match self {
            Backend::Remote(c) => c.clear_token(),
            Backend::Local(l) => l.clear_token(),
        }
    }

    fn is_authenticated(&self) -> bool {
        match self {
            Backend::Remote(c) => c.is_authenticated(),
            Backend::Local(l) => l.is_authenticated(),
        }
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        match self {
            Backend::Remote(c) => c.register(registration).await,
            Backend::Local(l) => l.register(registration).await,
        }
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        match self {
            Backend::Remote(c) => c.login(credentials).await,
            Backend::Local(l) => l.login(credentials).await,
        }
    }

    async fn current_user(&self) -> ApiResult<User> {
        match self {
            Backend::Remote(c) => c.current_user().await,
            Backend::Local(l) => l.current_user().await,
        }
    }

    async fn list_active(&self) -> ApiResult<Vec<Note>> {
        match self {
            Backend::Remote(c) => c.list_active().await,
            Backend::Local(l) => l.list_active().await,
        }
    }

    async fn list_archived(&self) -> ApiResult<Vec<Note>> {
        match self {
            Backend::Remote(c) => c.list_archived().await,
            Backend::Local(l) => l.list_archived().await,
        }
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        match self {
            Backend::Remote(c) => c.get_note(id).await,
            Backend::Local(l) => l.get_note(id).await,
        }
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        match self {
            Backend::Remote(c) => c.create_note(note).await,
            Backend::Local(l) => l.create_note(note).await,
        }
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        match self {
            Backend::Remote(c) => c.archive_note(id).await,
            Backend::Local(l) => l.archive_note(id).await,
        }
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        match self {
            Backend::Remote(c) => c.unarchive_note(id).await,
            Backend::Local(l) => l.unarchive_note(id).await,
        }
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        match self {
            Backend::Remote(c) => c.delete_note(id).await,
            Backend::Local(l) => l.delete_note(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_api_error_message_never_empty() {
        let e = ApiError::rejected("");
        assert_eq!(e.kind, ApiErrorKind::Rejected);
        assert!(!e.message.is_empty());
        assert_eq!(e.to_string(), e.message);
    }

    #[test]
    fn test_api_error_keeps_server_message() {
        let e = ApiError::rejected("Password is wrong");
        assert_eq!(e.to_string(), "Password is wrong");
    }

    #[test]
    fn test_backend_follows_config() {
        let store: SharedStore = Arc::new(MemoryStore::new());

        let remote = Backend::from_config(&EnvConfig::default(), store.clone());
        assert!(matches!(remote, Backend::Remote(_)));

        let local_cfg = EnvConfig {
            backend: BackendKind::Local,
            ..EnvConfig::default()
        };
        let local = Backend::from_config(&local_cfg, store);
        assert!(matches!(local, Backend::Local(_)));
    }

    #[test]
    fn test_backend_token_delegation() {
        let mut b = Backend::Remote(ApiClient::new("http://localhost".to_string()));
        assert!(!b.is_authenticated());
        b.set_token("t".to_string());
        assert!(b.is_authenticated());
        b.clear_token();
        assert!(!b.is_authenticated());
    }
}
