//! Generic CRUD service shared by every entity type.
//!
//! Each operation either returns the entity or fails with one of the two
//! expected outcomes, [`CoreError::NotFound`] or [`CoreError::InvalidData`].
//! Validation always runs before anything is written.

use std::sync::Arc;

use scoala_core::document::{merge_document, with_id};
use scoala_core::error::CoreError;
use scoala_core::types::new_doc_id;
use scoala_core::validation::validate_document;
use scoala_db::models::Document;
use scoala_db::repositories::DocumentRepo;
use scoala_db::store::DocumentStore;
use serde_json::Value;

use crate::error::AppResult;

pub struct CrudService<E> {
    repo: DocumentRepo<E>,
}

impl<E: Document> CrudService<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repo: DocumentRepo::new(store),
        }
    }

    /// Every document of the collection, unfiltered.
    pub async fn list(&self) -> AppResult<Vec<E>> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: &str) -> AppResult<E> {
        let entity = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))?;
        Ok(entity)
    }

    /// Validate `payload` and store it under a freshly assigned id.
    ///
    /// Any `id` supplied by the client is discarded.
    pub async fn create(&self, payload: Value) -> AppResult<E> {
        let id = new_doc_id();
        let entity = to_entity::<E>(with_id(payload, &id))?;
        let created = self.repo.insert(&entity).await?;
        tracing::info!(entity = E::ENTITY, id = %created.id(), "Document created");
        Ok(created)
    }

    /// Replace the whole document at `id` with `payload`.
    ///
    /// Optional fields absent from `payload` are cleared. The key is kept.
    pub async fn replace(&self, id: &str, payload: Value) -> AppResult<E> {
        if self.repo.find_raw(id).await?.is_none() {
            return Err(not_found::<E>(id).into());
        }
        let entity = to_entity::<E>(with_id(payload, id))?;
        self.store_update(id, entity).await
    }

    /// Merge `payload` into the document at `id`.
    ///
    /// Fields absent from `payload` keep their stored values; an explicit
    /// `null` clears an optional field. The key is kept.
    pub async fn patch(&self, id: &str, payload: Value) -> AppResult<E> {
        let existing = self
            .repo
            .find_raw(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))?;
        if !payload.is_object() {
            return Err(
                CoreError::invalid_data(E::ENTITY, "document must be a JSON object").into(),
            );
        }
        let merged = with_id(merge_document(&existing, &payload), id);
        let entity = to_entity::<E>(merged)?;
        self.store_update(id, entity).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(not_found::<E>(id).into());
        }
        tracing::info!(entity = E::ENTITY, id, "Document deleted");
        Ok(())
    }

    async fn store_update(&self, id: &str, entity: E) -> AppResult<E> {
        // The document can disappear between the existence check and the write.
        let updated = self
            .repo
            .replace(&entity)
            .await?
            .ok_or_else(|| not_found::<E>(id))?;
        tracing::info!(entity = E::ENTITY, id, "Document updated");
        Ok(updated)
    }
}

fn not_found<E: Document>(id: &str) -> CoreError {
    CoreError::not_found(E::ENTITY, id)
}

/// Run the entity's rule table over `doc`, then decode it.
fn to_entity<E: Document>(doc: Value) -> Result<E, CoreError> {
    validate_document(E::ENTITY, E::RULES, &doc)?;
    serde_json::from_value(doc).map_err(|e| CoreError::invalid_data(E::ENTITY, e.to_string()))
}
