// Card search panel: query box, results list, and a save action per result
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Card;

use crate::config::CardCollection;
use crate::services::profile_client::ProfileClient;
use crate::state::app_state::AppState;

fn run_search(mut state: Signal<AppState>, collection: &CardCollection) {
    state.write().run_search(&collection.0);
}

#[component]
pub fn SearchPanel() -> Element {
    let state = use_context::<Signal<AppState>>();
    let collection = use_context::<CardCollection>();
    let on_enter = collection.clone();
    let on_click = collection.clone();

    let query = state.read().query.clone();
    let results = state.read().results.clone();

    rsx! {
        div {
            class: "card",
            h2 { "Search" }
            p { "Type a name, optionally followed by a card number (e.g. \"Pikachu 25\")." }
            div {
                class: "flex",
                style: "gap: 0.5rem; margin-bottom: 1rem;",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search cards...",
                    value: "{query}",
                    oninput: move |evt| {
                        let mut state = state;
                        state.write().query = evt.value();
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            run_search(state, &on_enter);
                        }
                    },
                }
                button {
                    class: "btn",
                    onclick: move |_| run_search(state, &on_click),
                    "Search"
                }
            }
            if results.is_empty() {
                p { class: "accent", "No cards to show." }
            } else {
                ul {
                    class: "search-results",
                    for card in results {
                        ResultRow { key: "{card.id}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultRow(card: Card) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let profile = use_context::<ProfileClient>();
    let saved = state.read().last_saved.as_deref() == Some(card.id.as_str());

    let number = card.number.as_ref().map(|n| format!("#{}", n)).unwrap_or_default();
    let set_name = card.set_name.clone().unwrap_or_default();
    let card_id = card.id.clone();

    rsx! {
        li {
            span { strong { "{card.name}" } " {number} " span { class: "accent", "{set_name}" } }
            button {
                class: "btn btn-secondary",
                disabled: saved,
                onclick: move |_| {
                    let profile = profile.clone();
                    let card_id = card_id.clone();
                    state.write().last_saved = Some(card_id.clone());
                    // Best-effort: the outcome is logged by the updater and otherwise discarded.
                    spawn(async move {
                        profile.record_last_viewed(&card_id).await;
                    });
                },
                if saved { "Saved" } else { "Save" }
            }
        }
    }
}
