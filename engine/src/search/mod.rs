// Card search: a linear name/number filter over an in-memory collection.
use crate::error::{EngineError, EngineResult};
use shared::models::Card;

/// Parsed form of a free-text query: `"<name fragment> [number]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    pub name: String,
    pub number: Option<String>,
}

impl CardQuery {
    /// `None` for an empty or whitespace-only query. Tokens after the second are ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let mut tokens = input.split_whitespace();
        let name = tokens.next()?.to_lowercase();
        let number = tokens.next().map(str::to_string);
        Some(CardQuery { name, number })
    }

    fn matches(&self, card: &Card) -> EngineResult<bool> {
        if !card.name.to_lowercase().contains(&self.name) {
            return Ok(false);
        }
        match &self.number {
            None => Ok(true),
            Some(token) => {
                let number = card.number.as_ref().ok_or_else(|| EngineError::MalformedRecord {
                    id: card.id.clone(),
                    reason: "card has no number".to_string(),
                })?;
                Ok(number.to_string() == *token)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty; whatever results are on screen stay there.
    Unfiltered,
    Results(Vec<Card>),
}

impl SearchOutcome {
    /// Folds the outcome into an existing result list.
    pub fn apply_to(self, results: &mut Vec<Card>) {
        if let SearchOutcome::Results(cards) = self {
            *results = cards;
        }
    }
}

pub fn try_filter_cards(query: &CardQuery, cards: &[Card]) -> EngineResult<Vec<Card>> {
    let mut matched = Vec::new();
    for card in cards {
        if query.matches(card)? {
            matched.push(card.clone());
        }
    }
    Ok(matched)
}

/// Runs a search. Failures are logged and yield an empty result set.
pub fn search_cards(input: &str, cards: &[Card]) -> SearchOutcome {
    let Some(query) = CardQuery::parse(input) else {
        tracing::debug!("Empty search query, leaving results untouched");
        return SearchOutcome::Unfiltered;
    };

    match try_filter_cards(&query, cards) {
        Ok(matched) => {
            tracing::debug!(query = %input, matches = matched.len(), "Card search finished");
            SearchOutcome::Results(matched)
        }
        Err(e) => {
            tracing::error!(query = %input, "Search error: {}", e);
            SearchOutcome::Results(Vec::new())
        }
    }
}
