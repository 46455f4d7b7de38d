//! HTTP-level integration tests for the `/subjects` collection.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn test_get_subject_by_id() {
    let store = common::test_store();
    let id = common::create(&store, "/subjects", json!({"name": "Mathematics"})).await;

    let response = get(build_test_app(store), &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({"id": id, "name": "Mathematics", "description": null}));
}

#[tokio::test]
async fn test_create_subject_without_name_returns_400() {
    let store = common::test_store();
    for payload in [json!({}), json!({"name": null}), json!({"name": ""})] {
        let response = post_json(build_test_app(store.clone()), "/subjects", payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = get(build_test_app(store), "/subjects").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_update_subject() {
    let store = common::test_store();
    let id = common::create(&store, "/subjects", json!({"name": "Physics"})).await;

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/subjects/{id}"),
        json!({"name": "Physics II", "description": "Electromagnetism"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["name"], "Physics II");
    assert_eq!(json["description"], "Electromagnetism");
}

#[tokio::test]
async fn test_patch_subject_name_to_empty_returns_400() {
    let store = common::test_store();
    let id = common::create(&store, "/subjects", json!({"name": "Chemistry"})).await;

    let response = patch_json(
        build_test_app(store.clone()),
        &format!("/subjects/{id}"),
        json!({"name": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(build_test_app(store), &format!("/subjects/{id}")).await;
    assert_eq!(body_json(response).await["name"], "Chemistry");
}

#[tokio::test]
async fn test_delete_subject_twice_returns_404() {
    let store = common::test_store();
    let id = common::create(&store, "/subjects", json!({"name": "Geography"})).await;

    let response = delete(build_test_app(store.clone()), &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(build_test_app(store), &format!("/subjects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_collections_do_not_share_ids() {
    let store = common::test_store();
    let id = common::create(&store, "/subjects", json!({"name": "Music"})).await;

    let response = get(build_test_app(store), &format!("/videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
