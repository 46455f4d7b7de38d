//! In-process backend used when no database is configured, and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::DbError;

type Collection = IndexMap<String, Value>;

/// Keeps every collection in an insertion-ordered map.
///
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<&'static str, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn find_all(&self, collection: &'static str) -> Result<Vec<Value>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: &'static str,
        id: &str,
    ) -> Result<Option<Value>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn insert(
        &self,
        collection: &'static str,
        id: &str,
        doc: &Value,
    ) -> Result<Value, DbError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        if docs.contains_key(id) {
            return Err(DbError::DuplicateKey {
                collection,
                id: id.to_string(),
            });
        }
        docs.insert(id.to_string(), doc.clone());
        Ok(doc.clone())
    }

    async fn replace(
        &self,
        collection: &'static str,
        id: &str,
        doc: &Value,
    ) -> Result<Option<Value>, DbError> {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
        else {
            return Ok(None);
        };
        *slot = doc.clone();
        Ok(Some(doc.clone()))
    }

    async fn delete(&self, collection: &'static str, id: &str) -> Result<bool, DbError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .and_then(|docs| docs.shift_remove(id))
            .is_some())
    }
}
