/// Failures of the persistence collaborator.
///
/// These are never expected outcomes of a CRUD call; the HTTP layer maps
/// them to 500.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A stored document no longer matches its model.
    #[error("Stored document could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Duplicate key {id} in collection {collection}")]
    DuplicateKey {
        collection: &'static str,
        id: String,
    },
}
