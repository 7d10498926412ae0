// Opt-in persistence of the last selected theme.
use super::store::{SubscriptionId, ThemeStore};
use crate::error::EngineResult;
use serde::{Deserialize, Serialize};
use shared::models::ThemeMode;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: ThemeMode,
}

#[derive(Debug, Clone)]
pub struct ThemePreferenceFile {
    path: PathBuf,
}

impl ThemePreferenceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> EngineResult<Option<ThemeMode>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let stored: StoredPreference = serde_json::from_str(&content)?;
        Ok(Some(stored.theme))
    }

    pub fn save(&self, theme: ThemeMode) -> EngineResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&StoredPreference { theme })?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Saved theme, or `fallback` when the file is missing or unreadable.
    pub fn resolve_initial(&self, fallback: ThemeMode) -> ThemeMode {
        match self.load() {
            Ok(Some(theme)) => {
                tracing::info!(path = %self.path.display(), theme = %theme, "Restored saved theme");
                theme
            }
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Ignoring unreadable theme preference: {}", e);
                fallback
            }
        }
    }

    /// Writes every subsequent theme change back to the file. Write failures are logged.
    pub fn attach(self, store: &mut ThemeStore) -> SubscriptionId {
        store.subscribe(move |theme| {
            if let Err(e) = self.save(theme) {
                tracing::error!(path = %self.path.display(), "Failed to save theme preference: {}", e);
            }
        })
    }
}
