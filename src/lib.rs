mod app;
mod clipboard;
mod compare;
mod components;
mod config;
mod logging;
mod models;
mod pages;
mod persist;
mod quick_notes;
mod shortcuts;
mod state;
mod storage;
mod timers;
mod util;
mod window;

use crate::app::App;
use crate::config::NotesConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_defaults_without_window_env() {
        let cfg = NotesConfig::new();
        assert!(cfg.cleanup_interval_ms >= 1);
        assert!(!cfg.log_level.is_empty());
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = NotesConfig::new();
    logging::init(&config.log_level);
    tracing::info!(
        autosave_delay_ms = config.autosave_delay_ms,
        cleanup_interval_ms = config.cleanup_interval_ms,
        "Starting notes app"
    );
    mount_to_body(App);
}
