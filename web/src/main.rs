//! Composable Todos front end entry point

mod app;
mod components;
mod context;
mod logging;

use app::App;
use leptos::prelude::*;
use todos::config::AppConfig;

/// Configuration bundled with the page
const APP_CONFIG: &str = include_str!("../app.json");

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_json(APP_CONFIG) {
        Ok(config) => (config, None),
        Err(error) => (AppConfig::default(), Some(error)),
    };

    logging::init(&config);
    if let Some(error) = config_error {
        tracing::warn!(%error, "Falling back to default configuration");
    }

    tracing::info!(initial_filter = %config.initial_filter, "Mounting todo app");
    mount_to_body(move || view! { <App config=config /> });
}
