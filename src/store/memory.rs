//! In-memory `DocumentStore` backend.
//!
//! Backs the integration tests so they never need a live MongoDB. Filter
//! semantics come from `Filter::matches`, which the filter tests keep in
//! agreement with the BSON translation the Mongo backend uses.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::Document;
use tokio::sync::Mutex;

use super::{new_document_id, DocumentStore, Filter, StoreError};

#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, StoreError> {
        let id = new_document_id();
        document.insert("_id", id.clone());

        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Filter,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.lock().await;
        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(document))
                    .take(limit.max(0) as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.lock().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names.truncate(limit);
        Ok(names)
    }
}
