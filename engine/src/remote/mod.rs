// Remote document updates stamped with a server-assigned timestamp.
pub mod memory;

use crate::config::RemoteSettings;
use crate::error::EngineResult;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub use memory::InMemoryDocumentStore;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    pub collection: String,
    pub id: String,
}

impl DocumentRef {
    pub fn new(collection: &str, id: &str) -> Self {
        Self {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    pub fn path(&self) -> String {
        format!("{}/{}", self.collection, self.id)
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(Value),
    /// Replaced by the store's own clock when the update is applied.
    ServerTimestamp,
}

pub type UpdatePayload = BTreeMap<String, FieldValue>;

/// Merges `data` with a server timestamp under `timestamp_field`. The timestamp
/// wins if `data` already carries that field.
pub fn with_server_timestamp(data: Map<String, Value>, timestamp_field: &str) -> UpdatePayload {
    let mut payload: UpdatePayload = data
        .into_iter()
        .map(|(key, value)| (key, FieldValue::Value(value)))
        .collect();
    payload.insert(timestamp_field.to_string(), FieldValue::ServerTimestamp);
    payload
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Merges `payload` into an existing document.
    async fn update(&self, doc: &DocumentRef, payload: UpdatePayload) -> EngineResult<()>;
}

/// Completion signal for a spawned update. Awaiting it is optional; dropping it
/// leaves the update running with its result discarded.
#[derive(Debug)]
pub struct UpdateHandle {
    task: JoinHandle<bool>,
}

impl UpdateHandle {
    pub async fn completed(self) -> bool {
        match self.task.await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!("Document update task failed: {}", e);
                false
            }
        }
    }
}

#[derive(Clone)]
pub struct RemoteUpdater {
    store: Arc<dyn DocumentStore>,
    timestamp_field: String,
}

impl RemoteUpdater {
    pub fn new(store: Arc<dyn DocumentStore>, settings: &RemoteSettings) -> Self {
        Self {
            store,
            timestamp_field: settings.timestamp_field.clone(),
        }
    }

    /// Issues the update and reports whether it succeeded. Errors are logged, never returned.
    pub async fn update(&self, doc: &DocumentRef, data: Map<String, Value>) -> bool {
        let payload = with_server_timestamp(data, &self.timestamp_field);
        match self.store.update(doc, payload).await {
            Ok(()) => {
                tracing::info!(document = %doc, "Document updated");
                true
            }
            Err(e) => {
                tracing::error!(document = %doc, "Document update error: {}", e);
                false
            }
        }
    }

    /// Runs `update` on the tokio runtime without waiting for it.
    pub fn spawn_update(&self, doc: DocumentRef, data: Map<String, Value>) -> UpdateHandle {
        let updater = self.clone();
        let task = tokio::spawn(async move { updater.update(&doc, data).await });
        UpdateHandle { task }
    }
}

impl fmt::Debug for RemoteUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteUpdater")
            .field("timestamp_field", &self.timestamp_field)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use serde_json::json;

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn update(&self, doc: &DocumentRef, _payload: UpdatePayload) -> EngineResult<()> {
            Err(EngineError::Store(format!("permission denied for {}", doc)))
        }
    }

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_payload_gains_server_timestamp() {
        let payload = with_server_timestamp(data(json!({"favorite": "base-25"})), "updatedAt");
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["favorite"], FieldValue::Value(json!("base-25")));
        assert_eq!(payload["updatedAt"], FieldValue::ServerTimestamp);
    }

    #[test]
    fn test_server_timestamp_overrides_client_value() {
        let payload = with_server_timestamp(data(json!({"updatedAt": "yesterday"})), "updatedAt");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["updatedAt"], FieldValue::ServerTimestamp);
    }

    #[tokio::test]
    async fn test_update_writes_merged_document() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let doc = DocumentRef::new("users", "ash");
        store.insert(&doc, data(json!({"name": "Ash"}))).await;

        let updater = RemoteUpdater::new(store.clone(), &RemoteSettings::default());
        assert!(updater.update(&doc, data(json!({"lastViewed": "base-25"}))).await);

        let stored = store.get(&doc).await.unwrap();
        assert_eq!(stored["name"], json!("Ash"));
        assert_eq!(stored["lastViewed"], json!("base-25"));
        assert!(stored["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let updater = RemoteUpdater::new(Arc::new(FailingStore), &RemoteSettings::default());
        let ok = updater.update(&DocumentRef::new("users", "ash"), Map::new()).await;
        assert!(!ok);
    }

    #[tokio::test]
    async fn test_spawned_update_reports_completion() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let doc = DocumentRef::new("users", "misty");
        store.insert(&doc, Map::new()).await;
        let updater = RemoteUpdater::new(store.clone(), &RemoteSettings::default());

        let handle = updater.spawn_update(doc.clone(), data(json!({"badge": "cascade"})));
        assert!(handle.completed().await);
        assert_eq!(store.get(&doc).await.unwrap()["badge"], json!("cascade"));

        let missing = updater.spawn_update(DocumentRef::new("users", "nobody"), Map::new());
        assert!(!missing.completed().await);
    }

    #[tokio::test]
    async fn test_dropped_handle_still_applies_update() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let doc = DocumentRef::new("users", "brock");
        store.insert(&doc, Map::new()).await;
        let updater = RemoteUpdater::new(store.clone(), &RemoteSettings::default());

        drop(updater.spawn_update(doc.clone(), data(json!({"badge": "boulder"}))));
        for _ in 0..100 {
            if store.get(&doc).await.map_or(false, |d| d.contains_key("badge")) {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("update never landed");
    }
}
