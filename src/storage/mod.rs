use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub(crate) const TOKEN_KEY: &str = "accessToken";
pub(crate) const LOCALE_KEY: &str = "appLocale";
pub(crate) const THEME_KEY: &str = "appThemeMode_v3";

// Local backend documents.
pub(crate) const LOCAL_USERS_KEY: &str = "notes_local_users";
pub(crate) const LOCAL_TOKENS_KEY: &str = "notes_local_tokens";
pub(crate) const LOCAL_NOTES_KEY: &str = "notes_local_notes";

/// String key-value persistence.
///
/// Writes are best-effort: a full or unavailable browser storage must never
/// take the UI down, so failures are logged and dropped.
pub(crate) trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub(crate) type SharedStore = Arc<dyn KeyValueStore>;

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!(key, "localStorage rejected write");
                }
            }
            None => tracing::warn!(key, "localStorage unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Process-local store. Used off-browser and in tests.
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Store backing the running app: localStorage in the browser, memory elsewhere.
pub(crate) fn default_store() -> SharedStore {
    if cfg!(target_arch = "wasm32") {
        Arc::new(BrowserStorage)
    } else {
        Arc::new(MemoryStore::new())
    }
}

pub(crate) fn load_json<T: for<'de> Deserialize<'de>>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable stored document");
            None
        }
    }
}

pub(crate) fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => tracing::error!(key, error = %e, "failed to encode document"),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_roundtrip() {
        let s = BrowserStorage;
        s.remove("notes_test_key");
        assert!(s.get("notes_test_key").is_none());
        s.set("notes_test_key", "v1");
        assert_eq!(s.get("notes_test_key").as_deref(), Some("v1"));
        s.remove("notes_test_key");
        assert!(s.get("notes_test_key").is_none());
    }
}
