// Small helpers shared across the engine and GUI.
use crate::models::ColorRole;

/// CSS custom property name for a role, e.g. `--background`.
pub fn css_variable_name(role: ColorRole) -> String {
    format!("--{}", role.as_str())
}

/// `var(--role)` reference for inline styles.
pub fn css_var(role: ColorRole) -> String {
    format!("var({})", css_variable_name(role))
}
