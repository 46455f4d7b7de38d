//! Service layer: validation and existence checks in front of the repositories.

pub mod crud;

pub use crud::CrudService;
