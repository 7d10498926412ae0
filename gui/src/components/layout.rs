// Page shell: header with title and theme toggle, content slot, footer
#![allow(non_snake_case)]
use chrono::Datelike;
use dioxus::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::config::AppConfig;

pub fn footer_text(year: i32, title: &str) -> String {
    format!("© {} {}", year, title)
}

#[component]
pub fn Layout(children: Element) -> Element {
    let config = use_context::<AppConfig>();
    let title = config.app.title.clone();
    let footer = footer_text(chrono::Local::now().year(), &title);

    rsx! {
        div {
            class: "layout",
            header {
                class: "flex",
                style: "padding: 1rem; border-bottom: 1px solid var(--border); background: var(--surface);",
                div {
                    class: "container flex",
                    style: "justify-content: space-between; align-items: center; width: 100%;",
                    h1 { style: "margin: 0;", "{title}" }
                    ThemeToggle {}
                }
            }
            main {
                class: "container",
                style: "padding: 2rem 1rem;",
                {children}
            }
            footer {
                style: "padding: 1rem; border-top: 1px solid var(--border); background: var(--surface); text-align: center;",
                div {
                    class: "container",
                    p { style: "margin: 0;", "{footer}" }
                }
            }
        }
    }
}
