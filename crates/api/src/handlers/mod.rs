//! Request handlers.
//!
//! A single generic set of handlers (list, get_by_id, create, update, patch,
//! delete) serves every entity type. Handlers delegate to
//! [`crate::services::CrudService`] and map errors via [`crate::error::AppError`].

pub mod crud;
