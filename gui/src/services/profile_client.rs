// Client for the user's profile document.
// Updates are stamped with a server timestamp and run best-effort: failures are
// logged by the engine and never reach the UI.

use engine::config::RemoteSettings;
use engine::remote::{DocumentRef, InMemoryDocumentStore, RemoteUpdater};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ProfileClient {
    updater: RemoteUpdater,
    document: DocumentRef,
}

impl ProfileClient {
    /// Backed by the in-process store; a hosted store would slot in behind `DocumentStore`.
    pub fn new(settings: &RemoteSettings) -> Self {
        let document = DocumentRef::new(&settings.collection, &settings.document_id);
        let store = InMemoryDocumentStore::new().with_document(&document, Map::new());
        Self {
            updater: RemoteUpdater::new(Arc::new(store), settings),
            document,
        }
    }

    pub fn document(&self) -> &DocumentRef {
        &self.document
    }

    pub async fn record_last_viewed(&self, card_id: &str) -> bool {
        let mut data = Map::new();
        data.insert("lastViewed".to_string(), Value::String(card_id.to_string()));
        tracing::info!(card = %card_id, document = %self.document, "Saving last viewed card");
        self.updater.update(&self.document, data).await
    }
}
