mod api;
mod app;
mod components;
mod config;
mod i18n;
mod logging;
mod models;
mod notes;
mod pages;
mod routes;
mod session;
mod state;
mod storage;
mod theme;
mod util;

pub use app::App;

use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(EnvConfig::new().level_filter());
    mount_to_body(App);
}

