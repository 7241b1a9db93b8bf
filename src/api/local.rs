use super::{ApiError, ApiResult, NotesGateway};
use crate::models::{Credentials, NewNote, Note, Registration, User, MIN_PASSWORD_LENGTH};
use crate::storage::{
    load_json, save_json, SharedStore, LOCAL_NOTES_KEY, LOCAL_TOKENS_KEY, LOCAL_USERS_KEY,
};
use crate::util::{now_iso, random_id};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Account record kept in the browser. Passwords never leave the device.
#[derive(Serialize, Deserialize, Clone, Debug)]
struct StoredUser {
    id: String,
    name: String,
    email: String,
    password: String,
}

impl From<&StoredUser> for User {
    fn from(u: &StoredUser) -> Self {
        User {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
        }
    }
}

/// Offline backend: users, issued tokens and notes are JSON documents in the
/// key-value store.
#[derive(Clone)]
pub(crate) struct LocalGateway {
    store: SharedStore,
    token: Option<String>,
}

impl LocalGateway {
    pub fn new(store: SharedStore) -> Self {
        Self { store, token: None }
    }

    fn users(&self) -> Vec<StoredUser> {
        load_json(self.store.as_ref(), LOCAL_USERS_KEY).unwrap_or_default()
    }

    fn tokens(&self) -> HashMap<String, String> {
        load_json(self.store.as_ref(), LOCAL_TOKENS_KEY).unwrap_or_default()
    }

    fn notes(&self) -> Vec<Note> {
        load_json(self.store.as_ref(), LOCAL_NOTES_KEY).unwrap_or_default()
    }

    fn save_notes(&self, notes: &[Note]) {
        save_json(self.store.as_ref(), LOCAL_NOTES_KEY, &notes);
    }

    /// Resolves the current token to its user id.
    fn owner_id(&self) -> ApiResult<String> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| ApiError::unauthorized("Missing authentication"))?;
        self.tokens()
            .get(token)
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Invalid token"))
    }

    fn list(&self, archived: bool) -> ApiResult<Vec<Note>> {
        let owner = self.owner_id()?;
        Ok(self
            .notes()
            .into_iter()
            .filter(|n| n.owner.as_deref() == Some(owner.as_str()) && n.archived == archived)
            .collect())
    }

    /// Applies `edit` to the caller's note `id` and writes the collection back.
    fn update_owned(&self, id: &str, edit: impl FnOnce(&mut Vec<Note>, usize)) -> ApiResult<()> {
        let owner = self.owner_id()?;
        let mut notes = self.notes();
        let index = notes
            .iter()
            .position(|n| n.id == id && n.owner.as_deref() == Some(owner.as_str()))
            .ok_or_else(|| ApiError::not_found("Note is not found"))?;
        edit(&mut notes, index);
        self.save_notes(&notes);
        Ok(())
    }
}

impl NotesGateway for LocalGateway {
    fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn clear_token(&mut self) {
        self.token = None;
    }

    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        if registration.password().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::rejected(
                "\"password\" length must be at least 6 characters long",
            ));
        }

        let mut users = self.users();
        let email = registration.email();
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(ApiError::rejected("Email is already in use"));
        }

        users.push(StoredUser {
            id: random_id("user"),
            name: registration.name().to_string(),
            email: email.to_string(),
            password: registration.password().to_string(),
        });
        save_json(self.store.as_ref(), LOCAL_USERS_KEY, &users);
        tracing::debug!(email, "local account created");
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let user = self
            .users()
            .into_iter()
            .find(|u| {
                u.email.eq_ignore_ascii_case(&credentials.email) && u.password == credentials.password
            })
            .ok_or_else(|| ApiError::rejected("Email or password is wrong"))?;

        let token = random_id("token");
        let mut tokens = self.tokens();
        tokens.insert(token.clone(), user.id);
        save_json(self.store.as_ref(), LOCAL_TOKENS_KEY, &tokens);
        Ok(token)
    }

    async fn current_user(&self) -> ApiResult<User> {
        let owner = self.owner_id()?;
        self.users()
            .iter()
            .find(|u| u.id == owner)
            .map(User::from)
            .ok_or_else(|| ApiError::unauthorized("User is not found"))
    }

    async fn list_active(&self) -> ApiResult<Vec<Note>> {
        self.list(false)
    }

    async fn list_archived(&self) -> ApiResult<Vec<Note>> {
        self.list(true)
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        let owner = self.owner_id()?;
        self.notes()
            .into_iter()
            .find(|n| n.id == id && n.owner.as_deref() == Some(owner.as_str()))
            .ok_or_else(|| ApiError::not_found("Note is not found"))
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        let owner = self.owner_id()?;
        let created = Note {
            id: random_id("notes"),
            title: note.title().to_string(),
            body: note.body().to_string(),
            created_at: now_iso(),
            archived: false,
            owner: Some(owner),
        };
        let mut notes = self.notes();
        notes.push(created.clone());
        self.save_notes(&notes);
        Ok(created)
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        self.update_owned(id, |notes, i| notes[i].archived = true)
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        self.update_owned(id, |notes, i| notes[i].archived = false)
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        self.update_owned(id, |notes, i| {
            notes.remove(i);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use std::sync::Arc;

    fn gateway() -> LocalGateway {
        LocalGateway::new(Arc::new(MemoryStore::new()))
    }

    fn sign_in(gw: &mut LocalGateway, name: &str, email: &str) {
        let reg = Registration::new(name, email, "secret1", "secret1").expect("valid");
        block_on(gw.register(&reg)).expect("register");
        let token = block_on(gw.login(&Credentials::new(email, "secret1"))).expect("login");
        gw.set_token(token);
    }

    #[test]
    fn test_register_login_create_archive_delete_scenario() {
        let mut gw = gateway();
        sign_in(&mut gw, "Ann", "ann@x.com");

        let me = block_on(gw.current_user()).expect("current user");
        assert_eq!(me.name, "Ann");

        let note = NewNote::new("Hi", "World").expect("valid");
        let created = block_on(gw.create_note(&note)).expect("create");
        assert!(!created.archived);

        let active = block_on(gw.list_active()).expect("active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Hi");

        block_on(gw.archive_note(&created.id)).expect("archive");
        assert!(block_on(gw.list_active()).expect("active").is_empty());
        assert_eq!(block_on(gw.list_archived()).expect("archived").len(), 1);

        block_on(gw.delete_note(&created.id)).expect("delete");
        assert!(block_on(gw.list_active()).expect("active").is_empty());
        assert!(block_on(gw.list_archived()).expect("archived").is_empty());
    }

    #[test]
    fn test_unarchive_moves_note_back() {
        let mut gw = gateway();
        sign_in(&mut gw, "Ann", "ann@x.com");
        let created = block_on(gw.create_note(&NewNote::new("Hi", "World").expect("valid")))
            .expect("create");

        block_on(gw.archive_note(&created.id)).expect("archive");
        block_on(gw.unarchive_note(&created.id)).expect("unarchive");

        let active = block_on(gw.list_active()).expect("active");
        assert_eq!(active.len(), 1);
        assert!(block_on(gw.list_archived()).expect("archived").is_empty());
    }

    #[test]
    fn test_duplicate_email_is_rejected() {
        let mut gw = gateway();
        sign_in(&mut gw, "Ann", "ann@x.com");
        let again = Registration::new("Other", "ANN@x.com", "secret1", "secret1").expect("valid");
        let err = block_on(gw.register(&again)).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Rejected);
    }

    #[test]
    fn test_wrong_password_is_rejected_with_message() {
        let mut gw = gateway();
        sign_in(&mut gw, "Ann", "ann@x.com");
        let err = block_on(gw.login(&Credentials::new("ann@x.com", "nope"))).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Rejected);
        assert_eq!(err.message, "Email or password is wrong");
    }

    #[test]
    fn test_notes_are_scoped_to_owner() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut ann = LocalGateway::new(store.clone());
        let mut bob = LocalGateway::new(store);
        sign_in(&mut ann, "Ann", "ann@x.com");
        sign_in(&mut bob, "Bob", "bob@x.com");

        let created = block_on(ann.create_note(&NewNote::new("Hi", "World").expect("valid")))
            .expect("create");

        assert!(block_on(bob.list_active()).expect("active").is_empty());
        let err = block_on(bob.get_note(&created.id)).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        let err = block_on(bob.delete_note(&created.id)).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);

        assert!(block_on(ann.get_note(&created.id)).is_ok());
    }

    #[test]
    fn test_missing_note_is_not_found() {
        let mut gw = gateway();
        sign_in(&mut gw, "Ann", "ann@x.com");
        let err = block_on(gw.get_note("notes-missing")).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
    }

    #[test]
    fn test_unknown_token_is_unauthorized() {
        let mut gw = gateway();
        assert_eq!(
            block_on(gw.list_active()).unwrap_err().kind,
            ApiErrorKind::Unauthorized
        );
        gw.set_token("token-forged".to_string());
        assert_eq!(
            block_on(gw.current_user()).unwrap_err().kind,
            ApiErrorKind::Unauthorized
        );
    }
}
