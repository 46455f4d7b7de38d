use std::sync::Arc;

use scoala_db::models::Document;
use scoala_db::store::DocumentStore;

use crate::services::CrudService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store backing every entity collection.
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// CRUD service for entity type `E`, bound to this state's store.
    pub fn service<E: Document>(&self) -> CrudService<E> {
        CrudService::new(Arc::clone(&self.store))
    }
}
