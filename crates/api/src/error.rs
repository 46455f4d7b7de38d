use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scoala_core::error::CoreError;
use scoala_db::error::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for the expected CRUD outcomes and [`DbError`] for
/// storage faults. Implements [`IntoResponse`] to produce consistent JSON
/// error responses; no entity body is ever attached to an error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level outcome from `scoala_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure.
    #[error(transparent)]
    Database(#[from] DbError),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidData { entity, reason } => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_DATA",
                    format!("Invalid {entity} data: {reason}"),
                ),
            },

            // --- Storage errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
