use crate::types::DocId;

/// Outcomes a service operation can fail with.
///
/// `NotFound` and `InvalidData` are the only expected failures of a CRUD
/// operation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DocId },

    #[error("Invalid {entity} data: {reason}")]
    InvalidData {
        entity: &'static str,
        reason: String,
    },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl Into<DocId>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid_data(entity: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidData {
            entity,
            reason: reason.into(),
        }
    }
}
