// Pushes a palette into the style variable namespace.
use shared::models::{Palette, ThemeMode};
use shared::utils::css_variable_name;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Complete set of CSS custom properties for one palette, keyed by `--role`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariables {
    values: BTreeMap<String, String>,
}

impl StyleVariables {
    pub fn from_palette(palette: &Palette) -> Self {
        let values = palette
            .entries()
            .map(|(role, color)| (css_variable_name(role), color.to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders an inline declaration block: `--accent: #FF2D55; --background: #ffffff; ...`
    pub fn to_css_declarations(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Receiver of style variables. A commit replaces every previously set variable.
pub trait StyleSink {
    fn commit(&mut self, variables: StyleVariables);
}

/// In-process sink shared between the theme store and whatever renders the root element.
#[derive(Debug, Clone, Default)]
pub struct SharedStyleSink {
    current: Rc<RefCell<StyleVariables>>,
}

impl SharedStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> StyleVariables {
        self.current.borrow().clone()
    }

    pub fn css(&self) -> String {
        self.current.borrow().to_css_declarations()
    }
}

impl StyleSink for SharedStyleSink {
    fn commit(&mut self, variables: StyleVariables) {
        *self.current.borrow_mut() = variables;
    }
}

/// Resolves `mode` to its palette and commits all variables in a single call.
pub fn apply_theme(mode: ThemeMode, sink: &mut dyn StyleSink) {
    let variables = StyleVariables::from_palette(mode.palette());
    tracing::debug!(theme = %mode, count = variables.len(), "Applying theme style variables");
    sink.commit(variables);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ColorRole;

    #[derive(Default)]
    struct RecordingSink {
        commits: Vec<StyleVariables>,
    }

    impl StyleSink for RecordingSink {
        fn commit(&mut self, variables: StyleVariables) {
            self.commits.push(variables);
        }
    }

    #[test]
    fn test_apply_theme_sets_all_light_variables() {
        let mut sink = SharedStyleSink::new();
        apply_theme(ThemeMode::Light, &mut sink);
        let vars = sink.snapshot();

        assert_eq!(vars.len(), 7);
        assert_eq!(vars.get("--background"), Some("#ffffff"));
        assert_eq!(vars.get("--text"), Some("#1a1a1a"));
        assert_eq!(vars.get("--primary"), Some("#007AFF"));
        assert_eq!(vars.get("--secondary"), Some("#5856D6"));
        assert_eq!(vars.get("--accent"), Some("#FF2D55"));
        assert_eq!(vars.get("--surface"), Some("#f5f5f5"));
        assert_eq!(vars.get("--border"), Some("#e0e0e0"));
    }

    #[test]
    fn test_apply_theme_sets_all_dark_variables() {
        let mut sink = SharedStyleSink::new();
        apply_theme(ThemeMode::Dark, &mut sink);
        let vars = sink.snapshot();

        for role in ColorRole::ALL {
            assert_eq!(
                vars.get(&css_variable_name(role)),
                Some(Palette::DARK.color(role)),
                "role {}",
                role
            );
        }
    }

    #[test]
    fn test_each_commit_is_a_complete_palette() {
        let mut sink = RecordingSink::default();
        apply_theme(ThemeMode::Dark, &mut sink);
        apply_theme(ThemeMode::Light, &mut sink);

        assert_eq!(sink.commits.len(), 2);
        assert!(sink.commits.iter().all(|c| c.len() == ColorRole::ALL.len()));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut sink = SharedStyleSink::new();
        apply_theme(ThemeMode::Dark, &mut sink);
        let first = sink.snapshot();
        apply_theme(ThemeMode::Dark, &mut sink);
        assert_eq!(first, sink.snapshot());
    }

    #[test]
    fn test_css_declarations_render_every_variable() {
        let vars = StyleVariables::from_palette(&Palette::LIGHT);
        let css = vars.to_css_declarations();
        assert!(css.contains("--background: #ffffff;"));
        assert!(css.contains("--border: #e0e0e0;"));
        assert_eq!(css.matches(';').count(), 7);
    }
}
