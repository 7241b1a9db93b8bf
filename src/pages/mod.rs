mod auth;
mod guard;
mod not_found;
mod note_detail;
mod notes;

pub use auth::{LoginPage, RegisterPage};
pub use guard::RouteGuard;
pub use not_found::NotFoundPage;
pub use note_detail::NoteDetailPage;
pub use notes::{ArchivedPage, HomePage, NewNotePage};
