// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state; // Application state module

use app::App;
use config::{AppConfig, CardCollection};

const THEME_CSS: &str = include_str!("../assets/theme.css");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Card Shelf GUI (Dioxus Desktop)...");

    let app_config = AppConfig::load_default()?;
    tracing::info!("Successfully loaded default configuration version {}.", app_config.version);

    let cards = CardCollection::load_default()?;
    tracing::info!(cards = cards.0.len(), "Loaded card collection");

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.title.clone())
                .with_inner_size(LogicalSize::new(
                    app_config.app.window_width as f64,
                    app_config.app.window_height as f64,
                )),
        )
        .with_custom_head(format!("<style>{}</style>", THEME_CSS));

    // Config and cards are provided as context; App builds the theme store and other state from them.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(cards)
        .launch(App);

    tracing::info!("Card Shelf GUI finished.");
    Ok(())
}
