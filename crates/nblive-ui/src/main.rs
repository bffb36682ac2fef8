//! WASM entry point
//!
//! Trunk compiles this to WASM; it mounts the `App` component to the body.

use leptos::prelude::*;
use nblive_ui::App;
use nblive_ui::config::LandingConfig;
use nblive_ui::logging;
use tracing::Level;

fn main() {
    // Panic messages go to the browser console
    console_error_panic_hook::set_once();

    let (config, config_error) = LandingConfig::from_document();
    logging::init(config.level().unwrap_or(Level::INFO));
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring page configuration, using defaults");
    }

    mount_to_body(move || {
        view! {
            <App config=config />
        }
    });
}
