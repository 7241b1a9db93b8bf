use strum::EnumString;
use tracing::level_filters::LevelFilter;

pub(crate) const DEFAULT_API_URL: &str = "https://notes-api.dicoding.dev/v1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub(crate) enum BackendKind {
    #[default]
    Remote,
    Local,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub backend: BackendKind,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl EnvConfig {
    /// Reads `window.ENV`.
    pub fn new() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        Self::from_lookup(|key| {
            let env = env.as_ref()?;
            js_sys::Reflect::get(env, &key.into())
                .ok()
                .and_then(|v| v.as_string())
        })
    }

    /// Builds a config from a key lookup. Every setting is accepted both as
    /// `API_URL` (documented) and `api_url`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |upper: &str| {
            lookup(upper)
                .or_else(|| lookup(&upper.to_lowercase()))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = get("API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let backend = match get("BACKEND") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(backend = %raw, "unknown backend, using remote");
                BackendKind::Remote
            }),
            None => BackendKind::Remote,
        };

        let log_level = get("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Self {
            api_url,
            backend,
            log_level,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = EnvConfig::default();
        assert_eq!(c.api_url, DEFAULT_API_URL);
        assert_eq!(c.backend, BackendKind::Remote);
        assert_eq!(c.level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_upper_case_keys_win() {
        let c = config(&[("API_URL", "http://a"), ("api_url", "http://b")]);
        assert_eq!(c.api_url, "http://a");
    }

    #[test]
    fn test_lower_case_keys_are_accepted() {
        let c = config(&[("api_url", "http://b/"), ("backend", "LOCAL"), ("log_level", "debug")]);
        assert_eq!(c.api_url, "http://b");
        assert_eq!(c.backend, BackendKind::Local);
        assert_eq!(c.level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let c = config(&[("BACKEND", "carrier-pigeon"), ("LOG_LEVEL", "loud"), ("API_URL", "  ")]);
        assert_eq!(c.backend, BackendKind::Remote);
        assert_eq!(c.level_filter(), LevelFilter::INFO);
        assert_eq!(c.api_url, DEFAULT_API_URL);
    }
}
