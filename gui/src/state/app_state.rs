// Search state for the GUI.
// Theme state is not here: it lives in the engine's ThemeStore, provided as its own context.

use engine::search::search_cards;
use shared::models::Card;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub query: String,
    pub results: Vec<Card>,
    // Id of the card most recently sent to the profile document.
    pub last_saved: Option<String>,
}

impl AppState {
    /// Runs the current query against `cards`. An empty query keeps the previous results.
    pub fn run_search(&mut self, cards: &[Card]) {
        search_cards(&self.query, cards).apply_to(&mut self.results);
    }
}
