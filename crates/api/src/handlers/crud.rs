//! Generic handlers for a document collection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scoala_core::error::CoreError;
use scoala_core::types::DocId;
use scoala_db::models::Document;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::services::CrudService;
use crate::state::AppState;

/// GET /{collection}
pub async fn list<E: Document>(State(state): State<AppState>) -> AppResult<Json<Vec<E>>> {
    let items = state.service::<E>().list().await?;
    Ok(Json(items))
}

/// GET /{collection}/{id}
pub async fn get_by_id<E: Document>(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Json<E>> {
    let item = state.service::<E>().get(&id).await?;
    Ok(Json(item))
}

/// POST /{collection}
pub async fn create<E: Document>(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<E>)> {
    let payload = json_body::<E>(payload)?;
    let item = state.service::<E>().create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /{collection}/{id}
pub async fn update<E: Document>(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<E>> {
    let service = state.service::<E>();
    let payload = update_body(&service, &id, payload).await?;
    let item = service.replace(&id, payload).await?;
    Ok(Json(item))
}

/// PATCH /{collection}/{id}
pub async fn patch<E: Document>(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<E>> {
    let service = state.service::<E>();
    let payload = update_body(&service, &id, payload).await?;
    let item = service.patch(&id, payload).await?;
    Ok(Json(item))
}

/// DELETE /{collection}/{id}
///
/// Responds 200 with an empty body.
pub async fn delete<E: Document>(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<StatusCode> {
    state.service::<E>().delete(&id).await?;
    Ok(StatusCode::OK)
}

/// Unwrap a JSON body, reporting unreadable bodies as invalid entity data
/// instead of axum's default 415/422.
fn json_body<E: Document>(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::Core(CoreError::invalid_data(
            E::ENTITY,
            rejection.body_text(),
        ))),
    }
}

/// Like [`json_body`], but an unknown key wins over an unreadable body so
/// updates of missing documents always answer 404.
async fn update_body<E: Document>(
    service: &CrudService<E>,
    id: &str,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Value> {
    if payload.is_err() {
        service.get(id).await?;
    }
    json_body::<E>(payload)
}
