//! MongoDB `DocumentStore` backend.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::Document;
use mongodb::error::ErrorKind;
use mongodb::{Client, Database};

use crate::config::DatabaseConfig;

use super::{new_document_id, DocumentStore, Filter, StoreError};

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Build a client for the configured deployment. The driver connects
    /// lazily, so this succeeds even when the server is down; the first
    /// operation surfaces the failure instead.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(map_error)?;
        Ok(Self {
            db: client.database(&config.name),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, StoreError> {
        let id = new_document_id();
        document.insert("_id", id.clone());

        self.db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(map_error)?;
        Ok(id)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Filter,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter.to_query())
            .limit(limit)
            .await
            .map_err(map_error)?;

        cursor.try_collect().await.map_err(map_error)
    }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let mut names = self.db.list_collection_names().await.map_err(map_error)?;
        names.truncate(limit);
        Ok(names)
    }
}

fn map_error(error: mongodb::error::Error) -> StoreError {
    match *error.kind {
        ErrorKind::ServerSelection { ref message, .. } => {
            StoreError::Unavailable(message.clone())
        }
        _ => StoreError::Operation(error.to_string()),
    }
}
