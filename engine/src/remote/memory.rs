// In-process document store; stands in for the hosted store during development and tests.
use super::{DocumentRef, DocumentStore, FieldValue, UpdatePayload};
use crate::error::{EngineError, EngineResult};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, Map<String, Value>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        InMemoryDocumentStore {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Seeds a document before the store is shared.
    pub fn with_document(mut self, doc: &DocumentRef, fields: Map<String, Value>) -> Self {
        self.documents.get_mut().insert(doc.path(), fields);
        self
    }

    /// Creates or replaces a document.
    pub async fn insert(&self, doc: &DocumentRef, fields: Map<String, Value>) {
        self.documents.write().await.insert(doc.path(), fields);
    }

    pub async fn get(&self, doc: &DocumentRef) -> Option<Map<String, Value>> {
        self.documents.read().await.get(&doc.path()).cloned()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn update(&self, doc: &DocumentRef, payload: UpdatePayload) -> EngineResult<()> {
        let mut documents = self.documents.write().await;
        let fields = documents
            .get_mut(&doc.path())
            .ok_or_else(|| EngineError::DocumentNotFound(doc.path()))?;

        let now = Utc::now();
        for (key, value) in payload {
            let resolved = match value {
                FieldValue::Value(v) => v,
                FieldValue::ServerTimestamp => Value::String(now.to_rfc3339()),
            };
            fields.insert(key, resolved);
        }
        tracing::debug!(document = %doc, fields = fields.len(), "In-memory document merged");
        Ok(())
    }
}
