pub mod filter;
pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::Document;

pub use filter::Filter;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store operation failed: {0}")]
    Operation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}

/// All document persistence goes through this trait. Handlers never see a
/// backend type, only `Arc<dyn DocumentStore>` injected via `AppState`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store one document in `collection`, assigning it a fresh identifier.
    /// Returns the identifier; it is an opaque string to every caller.
    async fn insert_one(&self, collection: &str, document: Document)
        -> Result<String, StoreError>;

    /// Up to `limit` documents matching `filter`, in store-native order.
    /// An empty match is an empty vec, not an error.
    async fn find_many(
        &self,
        collection: &str,
        filter: Filter,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Collection names, capped at `limit`. Used by diagnostics only.
    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError>;
}

pub type DynDocumentStore = Arc<dyn DocumentStore>;

/// Identifier for a newly inserted document, stored in its `_id` field.
pub fn new_document_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_ids_are_unique() {
        let a = new_document_id();
        let b = new_document_id();
        assert_ne!(a, b);
    }

    #[test]
    fn document_ids_parse_as_uuid() {
        let id = new_document_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
}
