#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::theme::{build_theme_store, SharedStyleSink};

use crate::components::{Layout, Menu, SearchPanel};
use crate::config::AppConfig;
use crate::services::profile_client::ProfileClient;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    // The store writes palettes into `sink`; the root element renders them as custom properties.
    let sink = use_hook(SharedStyleSink::new);
    let theme = use_context_provider(|| Signal::new(build_theme_store(&config.theme, sink.clone())));
    use_context_provider(|| Signal::new(AppState::default()));
    use_context_provider(|| ProfileClient::new(&config.store));

    // Subscribes this component to theme changes.
    let mode = theme.read().theme();
    let style_variables = sink.css();

    rsx! {
        div {
            class: "app",
            "data-theme": "{mode}",
            style: "{style_variables}",
            Layout {
                Menu {}
                div {
                    class: "grid",
                    div {
                        class: "card",
                        h2 { "Welcome" }
                        p { "This is your modernized app with theme support!" }
                        button { class: "btn", "Get Started" }
                    }
                    div {
                        class: "card",
                        h2 { "Features" }
                        p { "Explore the new theme system and modern UI components." }
                        button { class: "btn btn-secondary", "Learn More" }
                    }
                }
                div {
                    style: "margin-top: 1rem;",
                    SearchPanel {}
                }
            }
        }
    }
}
