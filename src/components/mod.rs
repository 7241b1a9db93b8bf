pub mod confirm_dialog;
pub mod header;
pub mod layout;
pub mod navigation;
pub mod note_input;
pub mod note_item;
pub mod note_list;
pub mod notice_banner;
pub mod search_bar;
pub mod ui;

pub use confirm_dialog::ConfirmDeleteDialog;
pub use header::Header;
pub use layout::AppLayout;
pub use navigation::Navigation;
pub use note_input::NoteInput;
pub use note_item::NoteItem;
pub use note_list::NoteList;
pub use notice_banner::NoticeBanner;
pub use search_bar::SearchBar;
