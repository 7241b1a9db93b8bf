//! Locale preference and the static translation table.

use crate::models::ValidationError;
use crate::storage::{KeyValueStore, LOCALE_KEY};
use strum::{AsRefStr, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::Id => Locale::En,
            Locale::En => Locale::Id,
        }
    }

    /// Anything but a stored `"en"` falls back to the default.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(LOCALE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &dyn KeyValueStore) {
        store.set(LOCALE_KEY, self.as_ref());
    }

    /// Sets `<html lang>`.
    pub fn apply_to_document(self) {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", self.as_ref());
        }
    }

    pub(crate) fn month_names(self) -> [&'static str; 12] {
        match self {
            Locale::En => [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ],
            Locale::Id => [
                "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus",
                "September", "Oktober", "November", "Desember",
            ],
        }
    }

    /// Monday first.
    pub(crate) fn weekday_names(self) -> [&'static str; 7] {
        match self {
            Locale::En => [
                "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
            ],
            Locale::Id => ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub(crate) enum Msg {
    AppName,
    ActiveNotes,
    ArchivedNotes,
    AddNote,
    SearchPlaceholder,
    LoginAs,
    Logout,
    NoActiveNotes,
    NoArchivedNotes,
    DeleteAction,
    ArchiveAction,
    UnarchiveAction,
    ConfirmDeleteTitle,
    ConfirmDeleteText,
    ConfirmDeleteButton,
    CancelButton,
    RegisterTitle,
    LoginTitle,
    NameLabel,
    EmailLabel,
    PasswordLabel,
    ConfirmPasswordLabel,
    RegisterButton,
    LoginButton,
    HaveAccount,
    LoginHere,
    NoAccount,
    RegisterHere,
    MissingField,
    PasswordMismatch,
    PasswordMinLength,
    RegisterSuccess,
    RegisterFail,
    LoginFail,
    LoadingNotes,
    LoadingSession,
    LoadingNoteDetail,
    PageNotFound,
    PageNotFoundMessage,
    BackToHome,
    NewNoteTitle,
    NoteTitlePlaceholder,
    NoteBodyPlaceholder,
    CreateNoteButton,
    TitleCharLimit,
    NoteDetailCreatedOn,
    ThemeToggleDark,
    ThemeToggleLight,
    LanguageToggle,
    Copyright,
    LoginSuccessTitle,
    LogoutSuccessTitle,
    LogoutSuccessText,
    AddNoteSuccessTitle,
    AddNoteSuccessText,
    AddNoteFailTitle,
    AddNoteFailText,
    DeleteNoteSuccessTitle,
    DeleteNoteSuccessText,
    DeleteNoteFailTitle,
    DeleteNoteFailText,
    ArchiveNoteSuccessTitle,
    ArchiveNoteSuccessText,
    ArchiveNoteFailTitle,
    ArchiveNoteFailText,
    UnarchiveNoteSuccessTitle,
    UnarchiveNoteSuccessText,
    UnarchiveNoteFailTitle,
    UnarchiveNoteFailText,
    FetchActiveNotesFail,
    FetchArchivedNotesFail,
    FetchAllNotesFailText,
    LoginFailTitle,
    RegisterFailTitle,
    SuccessTitle,
    OopsTitle,
    ValidationWarningTitle,
    EmptyNoteWarning,
    TitleTooLongWarning,
    UntitledNote,
    NoNoteBody,
    BackButtonTooltip,
    ProcessingText,
    DismissButton,
}

impl From<ValidationError> for Msg {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::EmptyNote => Msg::EmptyNoteWarning,
            ValidationError::TitleTooLong => Msg::TitleTooLongWarning,
            ValidationError::MissingField => Msg::MissingField,
            ValidationError::PasswordMismatch => Msg::PasswordMismatch,
            ValidationError::PasswordTooShort => Msg::PasswordMinLength,
        }
    }
}

/// Raw template for `msg` in `locale`.
pub(crate) fn template(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => english(msg),
        Locale::Id => indonesian(msg),
    }
}

/// Looks up `msg` and fills its `{name}` placeholders.
pub(crate) fn translate(locale: Locale, msg: Msg, args: &[(&str, &str)]) -> String {
    let mut out = template(locale, msg).to_string();
    for (name, value) in args {
        out = out.replacen(&format!("{{{name}}}"), value, 1);
    }
    out
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Personal Notes App",
        Msg::ActiveNotes => "Active Notes",
        Msg::ArchivedNotes => "Archived Notes",
        Msg::AddNote => "Add Note",
        Msg::SearchPlaceholder => "Search notes by title...",
        Msg::LoginAs => "Logged in as: {name}",
        Msg::Logout => "Logout",
        Msg::NoActiveNotes => "No active notes.",
        Msg::NoArchivedNotes => "Archive is empty.",
        Msg::DeleteAction => "Delete",
        Msg::ArchiveAction => "Archive",
        Msg::UnarchiveAction => "Unarchive",
        Msg::ConfirmDeleteTitle => "Are you sure?",
        Msg::ConfirmDeleteText => "Deleted notes can't be recovered!",
        Msg::ConfirmDeleteButton => "Yes, delete it!",
        Msg::CancelButton => "Cancel",
        Msg::RegisterTitle => "Create New Account",
        Msg::LoginTitle => "Login to Notes App",
        Msg::NameLabel => "Full Name",
        Msg::EmailLabel => "Email Address",
        Msg::PasswordLabel => "Password (min. 6 chars)",
        Msg::ConfirmPasswordLabel => "Confirm Password",
        Msg::RegisterButton => "Register",
        Msg::LoginButton => "Login",
        Msg::HaveAccount => "Already have an account?",
        Msg::LoginHere => "Login here",
        Msg::NoAccount => "Don't have an account?",
        Msg::RegisterHere => "Register here",
        Msg::MissingField => "Name, email and password are required!",
        Msg::PasswordMismatch => "Password and confirmation password do not match!",
        Msg::PasswordMinLength => "Password must be at least 6 characters!",
        Msg::RegisterSuccess => "Registration successful! Please login.",
        Msg::RegisterFail => "Registration failed: {message}",
        Msg::LoginFail => "Login failed: {message}",
        Msg::LoadingNotes => "Loading notes...",
        Msg::LoadingSession => "Verifying session...",
        Msg::LoadingNoteDetail => "Loading note detail...",
        Msg::PageNotFound => "404 - Page Not Found",
        Msg::PageNotFoundMessage => "Oops! The page you're looking for doesn't exist.",
        Msg::BackToHome => "Back to Home",
        Msg::NewNoteTitle => "Create New Note",
        Msg::NoteTitlePlaceholder => "Note title...",
        Msg::NoteBodyPlaceholder => "Write your note here...",
        Msg::CreateNoteButton => "Create Note",
        Msg::TitleCharLimit => "Title characters remaining: {count}",
        Msg::NoteDetailCreatedOn => "Created on: {date}",
        Msg::ThemeToggleDark => "Dark Mode",
        Msg::ThemeToggleLight => "Light Mode",
        Msg::LanguageToggle => "Switch Language",
        Msg::Copyright => "© {year} Personal Notes App.",
        Msg::LoginSuccessTitle => "Login Successful!",
        Msg::LogoutSuccessTitle => "Logout Successful",
        Msg::LogoutSuccessText => "You have been successfully logged out.",
        Msg::AddNoteSuccessTitle => "Note Added!",
        Msg::AddNoteSuccessText => "New note has been added.",
        Msg::AddNoteFailTitle => "Failed to Add Note",
        Msg::AddNoteFailText => "Failed to add note.",
        Msg::DeleteNoteSuccessTitle => "Note Deleted!",
        Msg::DeleteNoteSuccessText => "The note has been successfully deleted.",
        Msg::DeleteNoteFailTitle => "Failed to Delete Note",
        Msg::DeleteNoteFailText => "Failed to delete note.",
        Msg::ArchiveNoteSuccessTitle => "Note Archived!",
        Msg::ArchiveNoteSuccessText => "The note has been successfully archived.",
        Msg::ArchiveNoteFailTitle => "Failed to Archive Note",
        Msg::ArchiveNoteFailText => "Failed to archive note.",
        Msg::UnarchiveNoteSuccessTitle => "Note Unarchived!",
        Msg::UnarchiveNoteSuccessText => "The note has been successfully unarchived.",
        Msg::UnarchiveNoteFailTitle => "Failed to Unarchive Note",
        Msg::UnarchiveNoteFailText => "Failed to unarchive note.",
        Msg::FetchActiveNotesFail => "Failed to fetch active notes: {message}",
        Msg::FetchArchivedNotesFail => "Failed to fetch archived notes: {message}",
        Msg::FetchAllNotesFailText => {
            "There was an error loading your notes. Please try again later."
        }
        Msg::LoginFailTitle => "Login Failed",
        Msg::RegisterFailTitle => "Registration Failed",
        Msg::SuccessTitle => "Success!",
        Msg::OopsTitle => "Oops...",
        Msg::ValidationWarningTitle => "Validation Warning",
        Msg::EmptyNoteWarning => "Note title and body cannot be empty.",
        Msg::TitleTooLongWarning => "Note title cannot be longer than 50 characters.",
        Msg::UntitledNote => "Untitled Note",
        Msg::NoNoteBody => "This note has no content.",
        Msg::BackButtonTooltip => "Back to previous page",
        Msg::ProcessingText => "Processing...",
        Msg::DismissButton => "Dismiss",
    }
}

fn indonesian(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Aplikasi Catatan Pribadi",
        Msg::ActiveNotes => "Catatan Aktif",
        Msg::ArchivedNotes => "Catatan Terarsip",
        Msg::AddNote => "Tambah Catatan",
        Msg::SearchPlaceholder => "Cari catatan berdasarkan judul...",
        Msg::LoginAs => "Login sebagai: {name}",
        Msg::Logout => "Logout",
        Msg::NoActiveNotes => "Tidak ada catatan aktif.",
        Msg::NoArchivedNotes => "Arsip kosong.",
        Msg::DeleteAction => "Hapus",
        Msg::ArchiveAction => "Arsipkan",
        Msg::UnarchiveAction => "Aktifkan",
        Msg::ConfirmDeleteTitle => "Apakah Anda yakin?",
        Msg::ConfirmDeleteText => "Catatan yang dihapus tidak dapat dikembalikan!",
        Msg::ConfirmDeleteButton => "Ya, hapus!",
        Msg::CancelButton => "Batal",
        Msg::RegisterTitle => "Buat Akun Baru",
        Msg::LoginTitle => "Login Aplikasi Catatan",
        Msg::NameLabel => "Nama Lengkap",
        Msg::EmailLabel => "Alamat Email",
        Msg::PasswordLabel => "Password (min. 6 karakter)",
        Msg::ConfirmPasswordLabel => "Konfirmasi Password",
        Msg::RegisterButton => "Registrasi",
        Msg::LoginButton => "Login",
        Msg::HaveAccount => "Sudah punya akun?",
        Msg::LoginHere => "Login di sini",
        Msg::NoAccount => "Belum punya akun?",
        Msg::RegisterHere => "Registrasi di sini",
        Msg::MissingField => "Nama, email, dan password wajib diisi!",
        Msg::PasswordMismatch => "Password dan konfirmasi password tidak cocok!",
        Msg::PasswordMinLength => "Password minimal harus 6 karakter!",
        Msg::RegisterSuccess => "Registrasi berhasil! Silakan login.",
        Msg::RegisterFail => "Registrasi gagal: {message}",
        Msg::LoginFail => "Login gagal: {message}",
        Msg::LoadingNotes => "Memuat catatan...",
        Msg::LoadingSession => "Memverifikasi sesi...",
        Msg::LoadingNoteDetail => "Memuat detail catatan...",
        Msg::PageNotFound => "404 - Halaman Tidak Ditemukan",
        Msg::PageNotFoundMessage => "Oops! Halaman yang Anda cari tidak ada.",
        Msg::BackToHome => "Kembali ke Beranda",
        Msg::NewNoteTitle => "Buat Catatan Baru",
        Msg::NoteTitlePlaceholder => "Judul catatan...",
        Msg::NoteBodyPlaceholder => "Tuliskan catatanmu di sini...",
        Msg::CreateNoteButton => "Buat Catatan",
        Msg::TitleCharLimit => "Sisa karakter judul: {count}",
        Msg::NoteDetailCreatedOn => "Dibuat pada: {date}",
        Msg::ThemeToggleDark => "Mode Gelap",
        Msg::ThemeToggleLight => "Mode Terang",
        Msg::LanguageToggle => "Ganti Bahasa",
        Msg::Copyright => "© {year} Aplikasi Catatan Pribadi.",
        Msg::LoginSuccessTitle => "Login Berhasil!",
        Msg::LogoutSuccessTitle => "Logout Berhasil",
        Msg::LogoutSuccessText => "Anda telah berhasil logout.",
        Msg::AddNoteSuccessTitle => "Catatan Ditambahkan!",
        Msg::AddNoteSuccessText => "Catatan baru telah ditambahkan.",
        Msg::AddNoteFailTitle => "Gagal Menambah Catatan",
        Msg::AddNoteFailText => "Gagal menambahkan catatan.",
        Msg::DeleteNoteSuccessTitle => "Catatan Dihapus!",
        Msg::DeleteNoteSuccessText => "Catatan telah berhasil dihapus.",
        Msg::DeleteNoteFailTitle => "Gagal Menghapus Catatan",
        Msg::DeleteNoteFailText => "Gagal menghapus catatan.",
        Msg::ArchiveNoteSuccessTitle => "Catatan Diarsipkan!",
        Msg::ArchiveNoteSuccessText => "Catatan telah berhasil diarsipkan.",
        Msg::ArchiveNoteFailTitle => "Gagal Mengarsipkan Catatan",
        Msg::ArchiveNoteFailText => "Gagal mengarsipkan catatan.",
        Msg::UnarchiveNoteSuccessTitle => "Catatan Diaktifkan!",
        Msg::UnarchiveNoteSuccessText => "Catatan telah berhasil diaktifkan dari arsip.",
        Msg::UnarchiveNoteFailTitle => "Gagal Mengaktifkan Catatan",
        Msg::UnarchiveNoteFailText => "Gagal mengaktifkan catatan.",
        Msg::FetchActiveNotesFail => "Gagal mengambil catatan aktif: {message}",
        Msg::FetchArchivedNotesFail => "Gagal mengambil catatan arsip: {message}",
        Msg::FetchAllNotesFailText => {
            "Terjadi kesalahan saat memuat catatan Anda. Silakan coba lagi nanti."
        }
        Msg::LoginFailTitle => "Login Gagal",
        Msg::RegisterFailTitle => "Registrasi Gagal",
        Msg::SuccessTitle => "Berhasil!",
        Msg::OopsTitle => "Oops...",
        Msg::ValidationWarningTitle => "Peringatan Validasi",
        Msg::EmptyNoteWarning => "Judul dan isi catatan tidak boleh kosong.",
        Msg::TitleTooLongWarning => "Judul catatan tidak boleh lebih dari 50 karakter.",
        Msg::UntitledNote => "Catatan Tanpa Judul",
        Msg::NoNoteBody => "Catatan ini tidak memiliki isi.",
        Msg::BackButtonTooltip => "Kembali ke halaman sebelumnya",
        Msg::ProcessingText => "Memproses...",
        Msg::DismissButton => "Tutup",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_message_has_both_translations() {
        for msg in Msg::iter() {
            assert!(!template(Locale::En, msg).is_empty(), "{msg:?} en");
            assert!(!template(Locale::Id, msg).is_empty(), "{msg:?} id");
        }
    }

    #[test]
    fn test_placeholders_match_across_locales() {
        let placeholders = |s: &str| {
            let mut out: Vec<String> = s
                .split('{')
                .skip(1)
                .filter_map(|rest| rest.split_once('}').map(|(name, _)| name.to_string()))
                .collect();
            out.sort();
            out
        };
        for msg in Msg::iter() {
            assert_eq!(
                placeholders(template(Locale::En, msg)),
                placeholders(template(Locale::Id, msg)),
                "{msg:?}"
            );
        }
    }

    #[test]
    fn test_translate_fills_named_placeholders() {
        assert_eq!(
            translate(Locale::En, Msg::LoginAs, &[("name", "Ann")]),
            "Logged in as: Ann"
        );
        assert_eq!(
            translate(Locale::Id, Msg::TitleCharLimit, &[("count", "50")]),
            "Sisa karakter judul: 50"
        );
    }

    #[test]
    fn test_translate_leaves_unknown_placeholders() {
        assert_eq!(
            translate(Locale::En, Msg::LoginFail, &[("other", "x")]),
            "Login failed: {message}"
        );
    }

    #[test]
    fn test_locale_defaults_to_indonesian() {
        let store = MemoryStore::new();
        assert_eq!(Locale::load(&store), Locale::Id);

        store.set(LOCALE_KEY, "fr");
        assert_eq!(Locale::load(&store), Locale::Id);
    }

    #[test]
    fn test_locale_toggle_persists() {
        let store = MemoryStore::new();
        let next = Locale::load(&store).toggled();
        next.save(&store);
        assert_eq!(store.get(LOCALE_KEY).as_deref(), Some("en"));
        assert_eq!(Locale::load(&store), Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::Id);
    }
}
