//! BIG BOSS Frontend Entry Point

mod admin;
mod app;
mod catalog;
mod commands;
mod components;
mod config;
mod context;
mod domain;
mod error;
mod logging;
mod sections;
mod store;
mod util;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // A broken override block must not keep the site from rendering
    let (config, config_error) = match SiteConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init(config.log_level()) {
        web_sys::console::error_1(&e.to_string().into());
    }
    if let Some(e) = config_error {
        log::warn!("[CONFIG] using defaults: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
