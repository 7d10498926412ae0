// Theme module: palette application, state container and optional persistence.
pub mod applier;
pub mod preference;
pub mod store;

pub use applier::{apply_theme, SharedStyleSink, StyleSink, StyleVariables};
pub use preference::ThemePreferenceFile;
pub use store::{SubscriptionId, ThemeStore};

use crate::config::ThemeSettings;

/// Builds the store from settings, restoring and persisting the selection when a
/// preference path is configured.
pub fn build_theme_store(settings: &ThemeSettings, sink: impl StyleSink + 'static) -> ThemeStore {
    match &settings.preference_path {
        Some(path) => {
            let preference = ThemePreferenceFile::new(path);
            let initial = preference.resolve_initial(settings.default);
            let mut store = ThemeStore::new(initial, sink);
            preference.attach(&mut store);
            store
        }
        None => ThemeStore::new(settings.default, sink),
    }
}
