// Theme toggle button shown in the layout header
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::theme::ThemeStore;
use shared::models::ThemeMode;

/// Icon for the mode the button switches to.
pub fn target_icon(current: ThemeMode) -> &'static str {
    match current {
        ThemeMode::Light => "🌙",
        ThemeMode::Dark => "☀️",
    }
}

pub fn target_label(current: ThemeMode) -> &'static str {
    match current {
        ThemeMode::Light => "Dark",
        ThemeMode::Dark => "Light",
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeStore>>();
    // Read on every render so the affordance always matches the store.
    let current = theme.read().theme();
    let icon = target_icon(current);
    let label = target_label(current);

    rsx! {
        button {
            class: "theme-toggle",
            onclick: move |_| theme.write().toggle_theme(),
            "{icon} {label} Mode"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affordance_points_at_other_mode() {
        assert_eq!(target_icon(ThemeMode::Light), "🌙");
        assert_eq!(target_label(ThemeMode::Light), "Dark");
        assert_eq!(target_icon(ThemeMode::Dark), "☀️");
        assert_eq!(target_label(ThemeMode::Dark), "Light");
    }
}
