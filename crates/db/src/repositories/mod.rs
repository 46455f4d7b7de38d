//! Repository layer.
//!
//! [`DocumentRepo`] is the typed face of a [`crate::store::DocumentStore`]:
//! one generic repository serves every [`crate::models::Document`] type.

pub mod document_repo;

pub use document_repo::DocumentRepo;
