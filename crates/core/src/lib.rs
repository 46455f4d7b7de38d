//! Domain logic shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the identifier types, the
//! domain error enum, the per-field validation engine and the JSON document
//! helpers used by create/update operations.

pub mod document;
pub mod error;
pub mod types;
pub mod validation;
