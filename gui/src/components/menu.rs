// Navigation menu with an embedded compact theme switch
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::theme::ThemeStore;

use super::theme_toggle::target_icon;
use crate::config::AppConfig;

#[component]
pub fn Menu() -> Element {
    let config = use_context::<AppConfig>();
    let mut theme = use_context::<Signal<ThemeStore>>();
    let current = theme.read().theme();
    let links = config.navigation.variant.links();
    let icon = target_icon(current);
    let switch_title = format!("Switch to {} mode", current.toggled());

    rsx! {
        nav {
            class: "menu",
            div {
                class: "menu-content",
                ul {
                    for link in links {
                        li { key: "{link.href}", a { href: "{link.href}", "{link.label}" } }
                    }
                }
                button {
                    class: "theme-toggle",
                    title: "{switch_title}",
                    onclick: move |_| theme.write().toggle_theme(),
                    "{icon}"
                }
            }
        }
    }
}
