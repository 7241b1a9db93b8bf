use crate::storage::{KeyValueStore, THEME_KEY};
use strum::{AsRefStr, EnumString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &dyn KeyValueStore) {
        store.set(THEME_KEY, self.as_ref());
    }

    /// Sets `data-theme` on `<html>` and toggles the Tailwind `dark` class.
    pub fn apply_to_document(self) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let _ = root.set_attribute("data-theme", self.as_ref());
        let _ = root
            .class_list()
            .toggle_with_force("dark", self == ThemeMode::Dark);
    }
}
