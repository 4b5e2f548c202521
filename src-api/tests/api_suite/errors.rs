// FICHIER : src-api/tests/api_suite/errors.rs

use crate::{build_app, init_test_env, init_test_env_with, send_json};
use axum::http::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use vitrine::raise_error;
use vitrine::store::DocumentStore;
use vitrine::utils::config::EnvMode;
use vitrine::utils::prelude::{async_trait, VitrineResult};

/// Base injoignable : chaque appel échoue comme une panne réseau.
#[derive(Debug)]
struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn get(&self, path: &str) -> VitrineResult<Option<Value>> {
        raise_error!(
            "ERR_STORE_HTTP_SEND",
            error = "connexion refusée",
            context = json!({ "path": path })
        );
    }

    async fn set(&self, path: &str, _value: &Value) -> VitrineResult<()> {
        raise_error!(
            "ERR_STORE_HTTP_SEND",
            error = "connexion refusée",
            context = json!({ "path": path })
        );
    }

    async fn remove(&self, path: &str) -> VitrineResult<()> {
        raise_error!(
            "ERR_STORE_HTTP_SEND",
            error = "connexion refusée",
            context = json!({ "path": path })
        );
    }

    fn backend_name(&self) -> &'static str {
        "unreachable"
    }
}

#[tokio::test]
async fn unknown_collection_is_404() {
    let env = init_test_env();
    let (status, body) = env.call_json(Method::GET, "/api/blog", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Unknown collection 'blog'");
}

#[tokio::test]
async fn malformed_path_is_400() {
    let env = init_test_env();
    for uri in ["/api", "/api/faqs/abc", "/api/faqs/1/2", "/nothing"] {
        let (status, body) = env.call_json(Method::GET, uri, None).await;
        assert_eq!(status, 400, "{}", uri);
        assert_eq!(body["message"], "Invalid API path");
    }
}

#[tokio::test]
async fn create_without_body_is_400() {
    let env = init_test_env();
    for body in [None, Some(""), Some("{}"), Some("[1]"), Some("{ pas du json")] {
        let (status, res) = env.call_json(Method::POST, "/api/contacts", body).await;
        assert_eq!(status, 400, "{:?}", body);
        assert_eq!(res["success"], false);
    }
    assert!(env.memory.snapshot().await.is_null());
}

#[tokio::test]
async fn delete_without_id_is_400() {
    let env = init_test_env_with(json!({ "faqs": [{ "id": 1 }] }), EnvMode::Test);

    let (status, body) = env.call_json(Method::DELETE, "/api/faqs", None).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Item id is required");

    let (status, _) = env
        .call_json(Method::DELETE, "/api/faqs?id=un", None)
        .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn delete_missing_item_is_404_and_leaves_data() {
    let env = init_test_env_with(json!({ "faqs": [{ "id": 1 }, { "id": 2 }] }), EnvMode::Test);
    let before = env.memory.snapshot().await;

    let (status, body) = env.call_json(Method::DELETE, "/api/faqs/9", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Item not found");

    let (status, body) = env.call_json(Method::DELETE, "/api/intents/1", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "No data found");

    assert_eq!(env.memory.snapshot().await, before);
}

#[tokio::test]
async fn other_methods_are_405() {
    let env = init_test_env();
    for (method, uri) in [
        (Method::PUT, "/api/faqs"),
        (Method::PATCH, "/api/faqs/1"),
        (Method::GET, "/api/faqs/1"),
        (Method::POST, "/api/faqs/1"),
    ] {
        let (status, body) = env.call_json(method.clone(), uri, Some("{}")).await;
        assert_eq!(status, 405, "{} {}", method, uri);
        assert_eq!(body["message"], "Method not allowed");
    }
}

#[tokio::test]
async fn delete_id_zero_skips_records_without_numeric_id() {
    let env = init_test_env_with(
        json!({ "faqs": [{ "question": "sans id" }, { "id": 1, "question": "Q1" }] }),
        EnvMode::Test,
    );
    let before = env.memory.snapshot().await;

    let (status, body) = env.call_json(Method::DELETE, "/api/faqs/0", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Item not found");
    assert_eq!(env.memory.snapshot().await, before);
}

#[tokio::test]
async fn store_failure_is_500_with_detail_outside_production() {
    let app = build_app(Arc::new(UnreachableStore), EnvMode::Development);

    let (status, body) = send_json(&app, Method::GET, "/api/faqs", None).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
    assert!(body["error"]
        .as_str()
        .expect("détail présent")
        .contains("ERR_STORE_HTTP_SEND"));

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/contacts",
        Some(r#"{ "name": "Ana" }"#),
    )
    .await;
    assert_eq!(status, 500);
}

#[tokio::test]
async fn store_failure_hides_detail_in_production() {
    let app = build_app(Arc::new(UnreachableStore), EnvMode::Production);

    for (method, uri) in [(Method::GET, "/api/products"), (Method::DELETE, "/api/faqs/1")] {
        let (status, body) = send_json(&app, method, uri, None).await;
        assert_eq!(status, 500, "{}", uri);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Internal server error" })
        );
    }
}
