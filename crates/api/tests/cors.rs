//! CORS behaviour of the application router.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

use scoala_api::config::CorsOrigins;
use scoala_api::router::build_app_router;
use scoala_api::state::AppState;

fn preflight(origin: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/videos")
        .header("origin", origin)
        .header("access-control-request-method", method)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn any_origin_is_allowed_by_default() {
    let app = common::build_test_app(common::test_store());
    let response = app
        .oneshot(preflight("https://anywhere.example", "PATCH"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn simple_request_from_any_origin_gets_allow_origin() {
    let app = common::build_test_app(common::test_store());
    let request = Request::builder()
        .uri("/subjects")
        .header("origin", "http://localhost:4200")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn configured_list_restricts_origins() {
    let mut config = common::test_config();
    config.cors_origins = CorsOrigins::List(vec!["http://localhost:4200".into()]);
    let state = AppState::new(common::test_store());

    let response = build_app_router(state.clone(), &config)
        .oneshot(preflight("http://localhost:4200", "GET"))
        .await
        .unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:4200"
    );

    let response = build_app_router(state, &config)
        .oneshot(preflight("https://evil.example", "GET"))
        .await
        .unwrap();
    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn preflight_allows_arbitrary_request_headers() {
    let app = common::build_test_app(common::test_store());
    let mut request = preflight("https://anywhere.example", "POST");
    request.headers_mut().insert(
        "access-control-request-headers",
        "content-type,authorization,x-requested-with".parse().unwrap(),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-headers"], "*");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
