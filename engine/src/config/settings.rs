// Engine settings, deserialized from the `theme` and `store` sections of the app config
use serde::Deserialize;
use shared::models::ThemeMode;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeSettings {
    pub default: ThemeMode,
    // When set, the last selected theme is remembered in this JSON file.
    pub preference_path: Option<PathBuf>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        ThemeSettings {
            default: ThemeMode::Light,
            preference_path: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RemoteSettings {
    pub timestamp_field: String,
    pub collection: String,
    pub document_id: String,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        RemoteSettings {
            timestamp_field: "updatedAt".to_string(),
            collection: "users".to_string(),
            document_id: "profile".to_string(),
        }
    }
}
