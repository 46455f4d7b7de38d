//! Key-based document storage.
//!
//! A [`DocumentStore`] knows nothing about entity types: it keeps JSON
//! documents in named collections and looks them up by string id. Typed
//! access goes through [`crate::repositories::DocumentRepo`].

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DbError;

pub use memory::MemoryDocumentStore;
pub use pg::PgDocumentStore;

#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), DbError>;

    /// All documents of a collection in the backend's natural order.
    async fn find_all(&self, collection: &'static str) -> Result<Vec<Value>, DbError>;

    /// Returns `None` if no document has this id.
    async fn find_by_id(
        &self,
        collection: &'static str,
        id: &str,
    ) -> Result<Option<Value>, DbError>;

    /// Store a new document under `id`, returning it as stored.
    async fn insert(
        &self,
        collection: &'static str,
        id: &str,
        doc: &Value,
    ) -> Result<Value, DbError>;

    /// Overwrite the document at `id`. Returns `None` if no document has this id.
    async fn replace(
        &self,
        collection: &'static str,
        id: &str,
        doc: &Value,
    ) -> Result<Option<Value>, DbError>;

    /// Remove the document at `id`. Returns `true` if a document was removed.
    async fn delete(&self, collection: &'static str, id: &str) -> Result<bool, DbError>;
}
