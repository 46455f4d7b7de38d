//! Route definitions shared by every document collection.

use axum::routing::get;
use axum::Router;
use scoala_db::models::Document;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes for entity `E` mounted at `base`.
///
/// ```text
/// GET    {base}          -> list
/// POST   {base}          -> create
/// GET    {base}/{id}     -> get_by_id
/// PUT    {base}/{id}     -> update
/// PATCH  {base}/{id}     -> patch
/// DELETE {base}/{id}     -> delete
/// ```
///
/// The collection routes also answer with a trailing slash.
pub fn router<E: Document>(base: &str) -> Router<AppState> {
    let collection = get(crud::list::<E>).post(crud::create::<E>);

    Router::new()
        .route(base, collection.clone())
        .route(&format!("{base}/"), collection)
        .route(
            &format!("{base}/{{id}}"),
            get(crud::get_by_id::<E>)
                .put(crud::update::<E>)
                .patch(crud::patch::<E>)
                .delete(crud::delete::<E>),
        )
}
