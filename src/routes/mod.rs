use crate::session::SessionState;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub(crate) const HOME_PATH: &str = "/";
pub(crate) const ARCHIVED_PATH: &str = "/archived";
pub(crate) const NEW_NOTE_PATH: &str = "/notes/new";
pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const REGISTER_PATH: &str = "/register";

pub(crate) const KEYWORD_PARAM: &str = "keyword";

pub(crate) fn note_path(id: &str) -> String {
    format!("/notes/{}", urlencoding::encode(id))
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RouteAccess {
    /// Only signed-out visitors (login, register).
    Public,
    Protected,
    /// Unknown paths: not-found for signed-in users, login otherwise.
    CatchAll,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum GuardOutcome {
    /// Session is still being verified.
    Pending,
    Render,
    Redirect(&'static str),
}

pub(crate) fn decide(access: RouteAccess, session: &SessionState) -> GuardOutcome {
    if session.initializing {
        return GuardOutcome::Pending;
    }
    match (access, session.is_authenticated()) {
        (RouteAccess::Public, true) => GuardOutcome::Redirect(HOME_PATH),
        (RouteAccess::Public, false) => GuardOutcome::Render,
        (RouteAccess::Protected | RouteAccess::CatchAll, true) => GuardOutcome::Render,
        (RouteAccess::Protected | RouteAccess::CatchAll, false) => GuardOutcome::Redirect(LOGIN_PATH),
    }
}

/// `path?keyword=...`, or bare `path` for an empty keyword.
pub(crate) fn with_keyword(path: &str, keyword: &str) -> String {
    if keyword.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}={}", path, KEYWORD_PARAM, urlencoding::encode(keyword))
    }
}

/// Where to go after deleting note `id` while on `current_path`, if anywhere.
pub(crate) fn after_delete(current_path: &str, id: &str, was_archived: bool) -> Option<&'static str> {
    if current_path != note_path(id) {
        return None;
    }
    Some(if was_archived { ARCHIVED_PATH } else { HOME_PATH })
}

/// Navigates to `path` unless the page owning `navigate` is already gone,
/// e.g. after a route guard swapped it out while a request was pending.
pub(crate) fn navigate_if_mounted<N>(navigate: StoredValue<N>, path: &str) -> bool
where
    N: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    let done = navigate
        .try_with_value(|nav| nav(path, NavigateOptions::default()))
        .is_some();
    if !done {
        tracing::debug!(path, "page unmounted, skipping navigation");
    }
    done
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::models::User;

    fn ann() -> SessionState {
        SessionState::signed_in(User {
            id: "user-1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        })
    }

    #[test]
    fn test_nothing_is_decided_while_initializing() {
        let s = SessionState::initializing();
        for access in [RouteAccess::Public, RouteAccess::Protected, RouteAccess::CatchAll] {
            assert_eq!(decide(access, &s), GuardOutcome::Pending);
        }
    }

    #[test]
    fn test_anonymous_visitor() {
        let s = SessionState::anonymous();
        assert_eq!(decide(RouteAccess::Public, &s), GuardOutcome::Render);
        assert_eq!(decide(RouteAccess::Protected, &s), GuardOutcome::Redirect(LOGIN_PATH));
        assert_eq!(decide(RouteAccess::CatchAll, &s), GuardOutcome::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_signed_in_user() {
        let s = ann();
        assert_eq!(decide(RouteAccess::Public, &s), GuardOutcome::Redirect(HOME_PATH));
        assert_eq!(decide(RouteAccess::Protected, &s), GuardOutcome::Render);
        assert_eq!(decide(RouteAccess::CatchAll, &s), GuardOutcome::Render);
    }

    #[test]
    fn test_logout_reopens_public_routes() {
        let mut s = ann();
        s.user = None;
        assert_eq!(decide(RouteAccess::Public, &s), GuardOutcome::Render);
    }

    #[test]
    fn test_with_keyword_encodes() {
        assert_eq!(with_keyword("/", ""), "/");
        assert_eq!(with_keyword("/", "a b&c"), "/?keyword=a%20b%26c");
        assert_eq!(with_keyword(ARCHIVED_PATH, "x"), "/archived?keyword=x");
    }

    #[test]
    fn test_after_delete_only_leaves_own_detail_page() {
        assert_eq!(after_delete("/", "n1", false), None);
        assert_eq!(after_delete("/notes/n2", "n1", false), None);
        assert_eq!(after_delete("/notes/n1", "n1", false), Some(HOME_PATH));
        assert_eq!(after_delete("/notes/n1", "n1", true), Some(ARCHIVED_PATH));
    }

    #[test]
    fn test_navigation_after_page_teardown_is_skipped() {
        let root = Owner::new();
        root.set();
        let page = root.child();

        let visited: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(vec![]));
        let log = visited.clone();
        let navigate = page.with(|| {
            StoredValue::new(move |path: &str, _: NavigateOptions| {
                log.lock().expect("lock").push(path.to_string());
            })
        });

        assert!(navigate_if_mounted(navigate, HOME_PATH));

        // Signing in makes the guard replace the login page.
        assert_eq!(decide(RouteAccess::Public, &ann()), GuardOutcome::Redirect(HOME_PATH));
        page.cleanup();

        assert!(!navigate_if_mounted(navigate, HOME_PATH));
        assert_eq!(*visited.lock().expect("lock"), vec![HOME_PATH.to_string()]);
    }
}
