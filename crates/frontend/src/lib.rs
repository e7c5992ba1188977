pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod layout;
pub mod shared;

use contracts::shared::config::{load_config, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

/// localStorage key holding an optional TOML config override
pub const CONFIG_STORAGE_KEY: &str = "supervision_config";

fn stored_config_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
        .filter(|s| !s.trim().is_empty())
}

#[wasm_bindgen]
pub fn hydrate() {
    let override_toml = stored_config_override();
    let (config, config_error) = match load_config(override_toml.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(err) = config_error {
        log::error!("Invalid config override, using defaults: {:#}", err);
    }

    leptos::mount::mount_to_body(move || {
        let config = config.clone();
        leptos::view! { <app::App config=config /> }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
