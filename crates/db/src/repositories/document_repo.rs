//! Generic typed repository over a document store.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use crate::error::DbError;
use crate::models::Document;
use crate::store::DocumentStore;

/// Provides get-all / get-by-id / insert / replace / delete for one entity type.
pub struct DocumentRepo<E> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for DocumentRepo<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E: Document> DocumentRepo<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// List every document of the collection in store order.
    pub async fn list(&self) -> Result<Vec<E>, DbError> {
        self.store
            .find_all(E::COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Find a document by id. Returns `None` if it does not exist.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<E>, DbError> {
        self.store
            .find_by_id(E::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Find a document by id without decoding it into `E`.
    ///
    /// Used by partial updates, which merge into the stored JSON.
    pub async fn find_raw(&self, id: &str) -> Result<Option<Value>, DbError> {
        self.store.find_by_id(E::COLLECTION, id).await
    }

    /// Insert a new document, returning it as stored.
    pub async fn insert(&self, entity: &E) -> Result<E, DbError> {
        let doc = serde_json::to_value(entity)?;
        let stored = self.store.insert(E::COLLECTION, entity.id(), &doc).await?;
        decode(stored)
    }

    /// Replace the stored document with the same id.
    ///
    /// Returns `None` if no document with that id exists.
    pub async fn replace(&self, entity: &E) -> Result<Option<E>, DbError> {
        let doc = serde_json::to_value(entity)?;
        self.store
            .replace(E::COLLECTION, entity.id(), &doc)
            .await?
            .map(decode)
            .transpose()
    }

    /// Delete by id. Returns `true` if a document was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, DbError> {
        self.store.delete(E::COLLECTION, id).await
    }
}

fn decode<E: Document>(doc: Value) -> Result<E, DbError> {
    serde_json::from_value(doc).map_err(|e| {
        tracing::error!(
            collection = E::COLLECTION,
            error = %e,
            "Stored document failed to decode"
        );
        DbError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;
    use crate::store::MemoryDocumentStore;

    fn repo() -> DocumentRepo<Subject> {
        DocumentRepo::new(Arc::new(MemoryDocumentStore::new()))
    }

    fn subject(id: &str, name: &str) -> Subject {
        Subject {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let repo = repo();
        let created = repo.insert(&subject("s1", "Mathematics")).await.unwrap();
        assert_eq!(created, subject("s1", "Mathematics"));

        let found = repo.find_by_id("s1").await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn replace_missing_returns_none() {
        let repo = repo();
        let result = repo.replace(&subject("ghost", "History")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_returns_all_in_insert_order() {
        let repo = repo();
        repo.insert(&subject("b", "Biology")).await.unwrap();
        repo.insert(&subject("a", "Art")).await.unwrap();

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Biology", "Art"]);
    }

    #[tokio::test]
    async fn undecodable_document_surfaces_decode_error() {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .insert(Subject::COLLECTION, "bad", &serde_json::json!({"id": "bad"}))
            .await
            .unwrap();
        let repo: DocumentRepo<Subject> = DocumentRepo::new(store);

        let err = repo.find_by_id("bad").await.unwrap_err();
        assert!(matches!(err, DbError::Decode(_)));
    }
}
