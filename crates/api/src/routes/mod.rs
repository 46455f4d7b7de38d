pub mod crud;
pub mod health;

use axum::Router;
use scoala_db::models::{LectureMaterial, Subject, Video};

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy:
///
/// ```text
/// /lecture-materials            list, create
/// /lecture-materials/{id}       get, update (PUT), patch, delete
///
/// /subjects                     list, create
/// /subjects/{id}                get, update (PUT), patch, delete
///
/// /videos                       list, create
/// /videos/{id}                  get, update (PUT), patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(crud::router::<LectureMaterial>("/lecture-materials"))
        .merge(crud::router::<Subject>("/subjects"))
        .merge(crud::router::<Video>("/videos"))
}
