//! Entity models.
//!
//! Every entity is a flat JSON document keyed by an opaque string id. The
//! [`Document`] trait carries the per-entity metadata the generic CRUD code
//! needs: a display name, the storage collection and the validation table.

pub mod lecture_material;
pub mod subject;
pub mod video;

use scoala_core::validation::FieldRule;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use lecture_material::LectureMaterial;
pub use subject::Subject;
pub use video::Video;

pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Entity name used in error messages (`"Video"`).
    const ENTITY: &'static str;
    /// Storage collection; also the PostgreSQL table name.
    const COLLECTION: &'static str;
    /// Rules a document must satisfy before it is persisted.
    const RULES: &'static [FieldRule];

    fn id(&self) -> &str;
}
