//! Cinerow
//!
//! A desktop streaming-catalog browser over a mock catalog: scrolling rows,
//! hover cards, detail overlays with recommendations and a mocked player.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod error;
mod hotkeys;
mod logging;
mod pages;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::config::AppConfig;

fn main() {
    let (config, config_error) = match AppConfig::discover() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(&config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "using default config");
    }
    tracing::info!(asset_base = %config.asset_base_path, "starting");

    let mut window = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Cinerow")
                .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    if let Some(assets) = core::paths::assets_dir() {
        tracing::debug!(path = %assets.display(), "serving assets");
        window = window.with_resource_directory(assets);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(app::App);
}
