// GUI configuration module
pub mod navigation; // Menu link sets

// Structure for the entire application configuration loaded from JSON.
// This mirrors the structure of assets/config/default.json
use anyhow::Context;
use engine::config::{RemoteSettings, ThemeSettings};
use serde::Deserialize;
use shared::models::Card;

use navigation::NavVariant;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub store: RemoteSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

fn default_window_width() -> u32 {
    1024
}

fn default_window_height() -> u32 {
    768
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct NavigationSettings {
    #[serde(default)]
    pub variant: NavVariant,
}

/// The in-memory card collection searched by the search panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CardCollection(pub Vec<Card>);

impl AppConfig {
    // The default config is embedded so the binary runs from any working directory.
    pub fn load_default() -> anyhow::Result<Self> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json(config_str)
    }

    pub fn from_json(config_str: &str) -> anyhow::Result<Self> {
        let config: AppConfig =
            serde_json::from_str(config_str).context("Failed to parse application config")?;
        Ok(config)
    }
}

impl CardCollection {
    pub fn load_default() -> anyhow::Result<Self> {
        let cards_str = include_str!("../../assets/data/cards.json");
        let cards: Vec<Card> =
            serde_json::from_str(cards_str).context("Failed to parse card collection")?;
        Ok(CardCollection(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ThemeMode;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.title, "Card Shelf");
        assert_eq!(config.theme.default, ThemeMode::Light);
        assert_eq!(config.navigation.variant, NavVariant::Collection);
        assert_eq!(config.store.timestamp_field, "updatedAt");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{"version":"0","app":{"title":"Shelf"}}"#).unwrap();
        assert_eq!(config.app.window_width, 1024);
        assert_eq!(config.navigation.variant, NavVariant::Classic);
        assert!(config.theme.preference_path.is_none());
        assert_eq!(config.store.collection, "users");
    }

    #[test]
    fn test_invalid_config_reports_context() {
        let err = AppConfig::from_json("{").unwrap_err();
        assert!(err.to_string().contains("Failed to parse application config"));
    }

    #[test]
    fn test_embedded_cards_include_both_pikachus() {
        let CardCollection(cards) = CardCollection::load_default().unwrap();
        let pikachus = cards.iter().filter(|c| c.name == "Pikachu").count();
        assert_eq!(pikachus, 2);
    }
}
