// FICHIER : src-api/tests/api_suite/cors.rs

use crate::{init_test_env, read_json};
use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

fn assert_cors_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, DELETE, OPTIONS"
    );
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn every_response_carries_cors_headers() {
    let env = init_test_env();

    let ok = env.call(Method::GET, "/api/faqs", None).await;
    assert_eq!(ok.status(), 200);
    assert_cors_headers(ok.headers());

    let not_found = env.call(Method::GET, "/api/blog", None).await;
    assert_eq!(not_found.status(), 404);
    assert_cors_headers(not_found.headers());
}

#[tokio::test]
async fn plain_options_is_200_empty() {
    let env = init_test_env();
    let response = env.call(Method::OPTIONS, "/api/products", None).await;
    assert_eq!(response.status(), 200);
    assert_cors_headers(response.headers());
    assert!(read_json(response).await.is_null());
}

#[tokio::test]
async fn browser_preflight_is_200() {
    let env = init_test_env();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contacts")
        .header("origin", "https://exemple.fr")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = env.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_cors_headers(response.headers());
}
