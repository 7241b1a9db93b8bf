mod row;

pub(crate) use row::{NoteRowState, RowEvent};

use crate::api::{ApiError, NotesGateway};
use crate::models::Note;

/// Which of the two mutually exclusive collections a note is listed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListKind {
    Active,
    Archived,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteCollections {
    pub active: Vec<Note>,
    pub archived: Vec<Note>,
}

/// Result of fetching both lists. A failed fetch leaves its collection empty
/// and records the error; the other list is still applied.
#[derive(Clone, Debug, Default)]
pub(crate) struct Refreshed {
    pub collections: NoteCollections,
    pub active_error: Option<ApiError>,
    pub archived_error: Option<ApiError>,
}

impl Refreshed {
    pub fn is_complete(&self) -> bool {
        self.active_error.is_none() && self.archived_error.is_none()
    }
}

/// Fetches the active and archived lists concurrently.
pub(crate) async fn fetch_collections<G: NotesGateway>(gateway: &G) -> Refreshed {
    let (active, archived) = futures::join!(gateway.list_active(), gateway.list_archived());

    let mut out = Refreshed::default();
    match active {
        Ok(notes) => out.collections.active = notes,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch active notes");
            out.active_error = Some(e);
        }
    }
    match archived {
        Ok(notes) => out.collections.archived = notes,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch archived notes");
            out.archived_error = Some(e);
        }
    }
    out
}

/// Notes whose title contains `keyword`, ignoring case. Bodies are not searched.
pub(crate) fn filter_by_title(notes: &[Note], keyword: &str) -> Vec<Note> {
    if keyword.is_empty() {
        return notes.to_vec();
    }
    let needle = keyword.to_lowercase();
    notes
        .iter()
        .filter(|n| n.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResult, LocalGateway};
    use crate::models::{Credentials, NewNote, Registration, User};
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use std::sync::Arc;

    fn note(id: &str, title: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: "2022-07-28T10:03:12.594Z".to_string(),
            archived: false,
            owner: None,
        }
    }

    fn signed_in_gateway() -> LocalGateway {
        let mut gw = LocalGateway::new(Arc::new(MemoryStore::new()));
        let reg = Registration::new("Ann", "ann@x.com", "secret1", "secret1").expect("valid");
        block_on(gw.register(&reg)).expect("register");
        let token = block_on(gw.login(&Credentials::new("ann@x.com", "secret1"))).expect("login");
        gw.set_token(token);
        gw
    }

    #[test]
    fn test_filter_matches_title_case_insensitively() {
        let notes = vec![note("1", "Meeting Notes", "agenda")];
        for keyword in ["meeting", "NOTES", "ing"] {
            assert_eq!(filter_by_title(&notes, keyword).len(), 1, "keyword {keyword}");
        }
    }

    #[test]
    fn test_filter_ignores_body() {
        let notes = vec![note("1", "Meeting Notes", "agenda")];
        assert!(filter_by_title(&notes, "agenda").is_empty());
    }

    #[test]
    fn test_empty_keyword_keeps_everything() {
        let notes = vec![note("1", "a", "x"), note("2", "b", "y")];
        assert_eq!(filter_by_title(&notes, "").len(), 2);
    }

    #[test]
    fn test_keyword_whitespace_is_significant() {
        let notes = vec![note("1", "ax", "x"), note("2", "a x", "y")];
        let hits = filter_by_title(&notes, " x");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_archive_moves_note_between_collections() {
        let gw = signed_in_gateway();
        let created = block_on(gw.create_note(&NewNote::new("Hi", "World").expect("valid")))
            .expect("create");

        let before = block_on(fetch_collections(&gw));
        assert!(before.is_complete());
        assert_eq!(before.collections.active.len(), 1);

        block_on(gw.archive_note(&created.id)).expect("archive");
        let after = block_on(fetch_collections(&gw)).collections;
        assert!(after.active.is_empty());
        assert_eq!(after.archived[0].id, created.id);

        block_on(gw.unarchive_note(&created.id)).expect("unarchive");
        let back = block_on(fetch_collections(&gw)).collections;
        assert_eq!(back.active[0].id, created.id);
        assert!(back.archived.is_empty());
    }

    #[test]
    fn test_delete_removes_note_from_both_collections() {
        let gw = signed_in_gateway();
        let a = block_on(gw.create_note(&NewNote::new("A", "a").expect("valid"))).expect("create");
        let b = block_on(gw.create_note(&NewNote::new("B", "b").expect("valid"))).expect("create");
        block_on(gw.archive_note(&b.id)).expect("archive");

        block_on(gw.delete_note(&a.id)).expect("delete");
        block_on(gw.delete_note(&b.id)).expect("delete");

        let c = block_on(fetch_collections(&gw)).collections;
        assert!(c.active.iter().chain(c.archived.iter()).all(|n| n.id != a.id && n.id != b.id));
    }

    /// Gateway whose archived list always fails.
    #[derive(Clone)]
    struct HalfBroken(LocalGateway);

    impl NotesGateway for HalfBroken {
        fn set_token(&mut self, token: String) {
            self.0.set_token(token)
        }
        fn clear_token(&mut self) {
            self.0.clear_token()
        }
        fn is_authenticated(&self) -> bool {
            self.0.is_authenticated()
        }
        async fn register(&self, r: &Registration) -> ApiResult<()> {
            self.0.register(r).await
        }
        async fn login(&self, c: &Credentials) -> ApiResult<String> {
            self.0.login(c).await
        }
        async fn current_user(&self) -> ApiResult<User> {
            self.0.current_user().await
        }
        async fn list_active(&self) -> ApiResult<Vec<Note>> {
            self.0.list_active().await
        }
        async fn list_archived(&self) -> ApiResult<Vec<Note>> {
            Err(ApiError::network("connection reset"))
        }
        async fn get_note(&self, id: &str) -> ApiResult<Note> {
            self.0.get_note(id).await
        }
        async fn create_note(&self, n: &NewNote) -> ApiResult<Note> {
            self.0.create_note(n).await
        }
        async fn archive_note(&self, id: &str) -> ApiResult<()> {
            self.0.archive_note(id).await
        }
        async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
            self.0.unarchive_note(id).await
        }
        async fn delete_note(&self, id: &str) -> ApiResult<()> {
            self.0.delete_note(id).await
        }
    }

    #[test]
    fn test_one_failed_list_does_not_block_the_other() {
        let gw = HalfBroken(signed_in_gateway());
        block_on(gw.create_note(&NewNote::new("Hi", "World").expect("valid"))).expect("create");

        let r = block_on(fetch_collections(&gw));
        assert!(!r.is_complete());
        assert!(r.active_error.is_none());
        assert_eq!(r.collections.active.len(), 1);
        assert!(r.archived_error.is_some());
        assert!(r.collections.archived.is_empty());
    }
}
