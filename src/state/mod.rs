use crate::api::{ApiError, ApiResult, Backend, NotesGateway};
use crate::config::EnvConfig;
use crate::i18n::{translate, Locale, Msg};
use crate::models::{Credentials, NewNote, Note, Registration, User, ValidationError};
use crate::notes::fetch_collections;
use crate::session::{SessionState, SessionStore};
use crate::storage::SharedStore;
use crate::theme::ThemeMode;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A dismissible message shown at the top of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub store: StoredValue<SharedStore>,
    pub session_store: StoredValue<SessionStore>,

    pub backend: RwSignal<Backend>,
    pub session: RwSignal<SessionState>,

    pub locale: RwSignal<Locale>,
    pub theme: RwSignal<ThemeMode>,

    pub active_notes: RwSignal<Vec<Note>>,
    pub archived_notes: RwSignal<Vec<Note>>,
    pub notes_loading: RwSignal<bool>,

    /// Bumped by every refresh; responses carrying an older id are dropped.
    pub notes_request_id: RwSignal<u64>,

    pub notice: RwSignal<Option<Notice>>,
    notice_seq: RwSignal<u64>,
}

impl AppState {
    pub fn new(config: &EnvConfig, store: SharedStore) -> Self {
        let locale = Locale::load(store.as_ref());
        let theme = ThemeMode::load(store.as_ref());
        let backend = Backend::from_config(config, store.clone());

        Self {
            store: StoredValue::new(store.clone()),
            session_store: StoredValue::new(SessionStore::new(store)),
            backend: RwSignal::new(backend),
            session: RwSignal::new(SessionState::initializing()),
            locale: RwSignal::new(locale),
            theme: RwSignal::new(theme),
            active_notes: RwSignal::new(vec![]),
            archived_notes: RwSignal::new(vec![]),
            notes_loading: RwSignal::new(false),
            notes_request_id: RwSignal::new(0),
            notice: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
        }
    }

    /// Reactive translation in the current locale.
    pub fn t(self, msg: Msg) -> String {
        translate(self.locale.get(), msg, &[])
    }

    pub fn tr(self, msg: Msg, args: &[(&str, &str)]) -> String {
        translate(self.locale.get(), msg, args)
    }

    fn t_now(self, msg: Msg) -> String {
        translate(self.locale.get_untracked(), msg, &[])
    }

    pub fn current_user(self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub fn notify(self, kind: NoticeKind, title: String, message: String) {
        let id = self.notice_seq.get_untracked().wrapping_add(1);
        self.notice_seq.set(id);
        self.notice.set(Some(Notice {
            id,
            kind,
            title,
            message,
        }));
    }

    /// Clears the notice only if it is still the one identified by `id`.
    pub fn dismiss_notice(self, id: u64) {
        if self.notice.with_untracked(|n| n.as_ref().map(|n| n.id)) == Some(id) {
            self.notice.set(None);
        }
    }

    fn notify_failure(self, title: Msg, fallback: Msg, e: &ApiError) {
        let message = if e.message.trim().is_empty() {
            self.t_now(fallback)
        } else {
            e.message.clone()
        };
        self.notify(NoticeKind::Error, self.t_now(title), message);
    }

    pub fn notify_validation(self, e: ValidationError) {
        self.notify(
            NoticeKind::Warning,
            self.t_now(Msg::ValidationWarningTitle),
            self.t_now(Msg::from(e)),
        );
    }

    pub fn toggle_locale(self) {
        let next = self.locale.get_untracked().toggled();
        self.store.with_value(|s| next.save(s.as_ref()));
        self.locale.set(next);
    }

    pub fn toggle_theme(self) {
        let next = self.theme.get_untracked().toggled();
        self.store.with_value(|s| next.save(s.as_ref()));
        self.theme.set(next);
    }

    /// Resolves the stored credential, then loads notes.
    pub async fn initialize_session(self) {
        let session_store = self.session_store.get_value();
        let mut backend = self.backend.get_untracked();
        let user = session_store.initialize(&mut backend).await;

        self.backend.set(backend);
        self.session.set(match user {
            Some(u) => SessionState::signed_in(u),
            None => SessionState::anonymous(),
        });
        self.refresh_notes().await;
    }

    pub async fn login(self, credentials: Credentials) -> ApiResult<User> {
        let session_store = self.session_store.get_value();
        let mut backend = self.backend.get_untracked();
        let user = session_store.login(&mut backend, &credentials).await?;

        self.backend.set(backend);
        self.session.set(SessionState::signed_in(user.clone()));
        self.notify(
            NoticeKind::Success,
            self.t_now(Msg::LoginSuccessTitle),
            translate(
                self.locale.get_untracked(),
                Msg::LoginAs,
                &[("name", user.name.as_str())],
            ),
        );
        self.refresh_notes().await;
        Ok(user)
    }

    pub async fn register(self, registration: Registration) -> ApiResult<()> {
        let session_store = self.session_store.get_value();
        let backend = self.backend.get_untracked();
        session_store.register(&backend, &registration).await
    }

    /// Synchronous: no network call is made.
    pub fn logout(self) {
        let session_store = self.session_store.get_value();
        let mut backend = self.backend.get_untracked();
        session_store.logout(&mut backend);

        self.backend.set(backend);
        self.session.set(SessionState::anonymous());
        self.clear_notes();
        self.notify(
            NoticeKind::Info,
            self.t_now(Msg::LogoutSuccessTitle),
            self.t_now(Msg::LogoutSuccessText),
        );
    }

    fn clear_notes(self) {
        // Invalidate any refresh still in flight.
        self.notes_request_id.update(|id| *id = id.wrapping_add(1));
        self.active_notes.set(vec![]);
        self.archived_notes.set(vec![]);
        self.notes_loading.set(false);
    }

    /// Refetches both collections. A later call supersedes an earlier one.
    pub async fn refresh_notes(self) {
        let backend = self.backend.get_untracked();
        self.refresh_from(backend).await;
    }

    async fn refresh_from<G: NotesGateway>(self, gateway: G) {
        if !self.session.with_untracked(|s| s.is_authenticated()) {
            self.clear_notes();
            return;
        }

        let req_id = self.notes_request_id.get_untracked().wrapping_add(1);
        self.notes_request_id.set(req_id);
        self.notes_loading.set(true);

        let refreshed = fetch_collections(&gateway).await;

        // Ignore stale responses.
        if self.notes_request_id.get_untracked() != req_id {
            tracing::debug!(req_id, "dropping superseded notes refresh");
            return;
        }

        if refreshed.is_complete() {
            tracing::debug!(
                active = refreshed.collections.active.len(),
                archived = refreshed.collections.archived.len(),
                "notes refreshed"
            );
        }
        self.active_notes.set(refreshed.collections.active);
        self.archived_notes.set(refreshed.collections.archived);
        self.notes_loading.set(false);

        let locale = self.locale.get_untracked();
        match (refreshed.active_error, refreshed.archived_error) {
            (None, None) => {}
            (Some(_), Some(_)) => self.notify(
                NoticeKind::Error,
                self.t_now(Msg::OopsTitle),
                self.t_now(Msg::FetchAllNotesFailText),
            ),
            (Some(e), None) => self.notify(
                NoticeKind::Error,
                self.t_now(Msg::OopsTitle),
                translate(locale, Msg::FetchActiveNotesFail, &[("message", e.message.as_str())]),
            ),
            (None, Some(e)) => self.notify(
                NoticeKind::Error,
                self.t_now(Msg::OopsTitle),
                translate(locale, Msg::FetchArchivedNotesFail, &[("message", e.message.as_str())]),
            ),
        }
    }

    pub async fn create_note(self, note: NewNote) -> ApiResult<Note> {
        let backend = self.backend.get_untracked();
        match backend.create_note(&note).await {
            Ok(created) => {
                tracing::info!(note_id = %created.id, "note created");
                self.refresh_notes().await;
                self.notify(
                    NoticeKind::Success,
                    self.t_now(Msg::AddNoteSuccessTitle),
                    self.t_now(Msg::AddNoteSuccessText),
                );
                Ok(created)
            }
            Err(e) => {
                tracing::warn!(error = %e, "create note failed");
                self.notify_failure(Msg::AddNoteFailTitle, Msg::AddNoteFailText, &e);
                Err(e)
            }
        }
    }

    pub async fn delete_note(self, id: String) -> ApiResult<()> {
        let backend = self.backend.get_untracked();
        match backend.delete_note(&id).await {
            Ok(()) => {
                tracing::info!(note_id = %id, "note deleted");
                self.refresh_notes().await;
                self.notify(
                    NoticeKind::Success,
                    self.t_now(Msg::DeleteNoteSuccessTitle),
                    self.t_now(Msg::DeleteNoteSuccessText),
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(note_id = %id, error = %e, "delete note failed");
                self.notify_failure(Msg::DeleteNoteFailTitle, Msg::DeleteNoteFailText, &e);
                Err(e)
            }
        }
    }

    /// Archives (`archived = true`) or unarchives a note.
    pub async fn set_archived(self, id: String, archived: bool) -> ApiResult<()> {
        let backend = self.backend.get_untracked();
        let result = if archived {
            backend.archive_note(&id).await
        } else {
            backend.unarchive_note(&id).await
        };

        let (ok_title, ok_text, fail_title, fail_text) = if archived {
            (
                Msg::ArchiveNoteSuccessTitle,
                Msg::ArchiveNoteSuccessText,
                Msg::ArchiveNoteFailTitle,
                Msg::ArchiveNoteFailText,
            )
        } else {
            (
                Msg::UnarchiveNoteSuccessTitle,
                Msg::UnarchiveNoteSuccessText,
                Msg::UnarchiveNoteFailTitle,
                Msg::UnarchiveNoteFailText,
            )
        };

        match result {
            Ok(()) => {
                tracing::info!(note_id = %id, archived, "note archive state changed");
                self.refresh_notes().await;
                self.notify(NoticeKind::Success, self.t_now(ok_title), self.t_now(ok_text));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(note_id = %id, archived, error = %e, "archive toggle failed");
                self.notify_failure(fail_title, fail_text, &e);
                Err(e)
            }
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
