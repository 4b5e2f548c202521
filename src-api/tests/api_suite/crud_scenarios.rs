// FICHIER : src-api/tests/api_suite/crud_scenarios.rs

use crate::{init_test_env, init_test_env_with};
use axum::http::Method;
use serde_json::json;
use vitrine::utils::config::EnvMode;

#[tokio::test]
async fn faqs_full_lifecycle() {
    let env = init_test_env();

    // 1. Collection vide -> []
    let (status, body) = env.call_json(Method::GET, "/api/faqs", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    // 2. Création
    let (status, body) = env
        .call_json(
            Method::POST,
            "/api/faqs",
            Some(r#"{ "question": "Q1", "answer": "A1" }"#),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "FAQ added successfully");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["question"], "Q1");
    assert_eq!(body["data"]["answer"], "A1");
    assert!(body["data"]["createdAt"].is_string());

    // 3. Lecture
    let (_, body) = env.call_json(Method::GET, "/api/faqs", None).await;
    let items = body.as_array().expect("tableau nu");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);

    // 4. Suppression par segment de chemin
    let (status, body) = env.call_json(Method::DELETE, "/api/faqs/1", None).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "success": true, "message": "FAQ deleted successfully" })
    );

    // 5. Collection de nouveau vide, noeud supprimé
    let (_, body) = env.call_json(Method::GET, "/api/faqs", None).await;
    assert_eq!(body, json!([]));
    assert!(env.memory.snapshot().await.get("faqs").is_none());
}

#[tokio::test]
async fn products_listing_is_always_wrapped() {
    let env = init_test_env();
    let (status, body) = env.call_json(Method::GET, "/api/products", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true, "products": [] }));

    env.call_json(
        Method::POST,
        "/api/products",
        Some(r#"{ "name": "Lampe", "price": 42 }"#),
    )
    .await;

    let (_, body) = env.call_json(Method::GET, "/api/products", None).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["products"][0]["name"], "Lampe");
    assert_eq!(body["products"][0]["id"], 1);
}

#[tokio::test]
async fn create_continues_from_max_id() {
    let env = init_test_env_with(
        json!({ "testimonials": [{ "id": 3 }, { "id": 11 }, { "name": "sans id" }] }),
        EnvMode::Test,
    );

    let (_, body) = env
        .call_json(
            Method::POST,
            "/api/testimonials",
            Some(r#"{ "id": 1, "createdAt": "jadis", "name": "Ana" }"#),
        )
        .await;
    assert_eq!(body["message"], "Testimonial added successfully");
    assert_eq!(body["data"]["id"], 12);
    assert_ne!(body["data"]["createdAt"], "jadis");
}

#[tokio::test]
async fn submissions_use_submitted_message() {
    let env = init_test_env();
    let (_, body) = env
        .call_json(
            Method::POST,
            "/api/inquiries",
            Some(r#"{ "email": "a@b.c", "text": "Devis ?" }"#),
        )
        .await;
    assert_eq!(body["message"], "Inquiry submitted successfully");
}

#[tokio::test]
async fn delete_by_query_parameter() {
    let env = init_test_env_with(
        json!({ "services": [{ "id": 1, "title": "Audit" }, { "id": 2, "title": "Conseil" }] }),
        EnvMode::Test,
    );

    let (status, body) = env
        .call_json(Method::DELETE, "/api/services?id=1", None)
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Service deleted successfully");

    let (_, body) = env.call_json(Method::GET, "/api/services", None).await;
    assert_eq!(body, json!([{ "id": 2, "title": "Conseil" }]));
}

#[tokio::test]
async fn keyed_collection_middle_delete_keeps_siblings() {
    let env = init_test_env_with(
        json!({
            "testimonials": {
                "-k1": { "id": 1, "name": "Ana" },
                "-k2": { "id": 2, "name": "Bo" },
                "-k3": { "id": 3, "name": "Cy" }
            }
        }),
        EnvMode::Test,
    );

    let (_, body) = env.call_json(Method::GET, "/api/testimonials", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (status, _) = env
        .call_json(Method::DELETE, "/api/testimonials/2", None)
        .await;
    assert_eq!(status, 200);

    assert_eq!(
        env.memory.snapshot().await["testimonials"],
        json!({
            "-k1": { "id": 1, "name": "Ana" },
            "-k3": { "id": 3, "name": "Cy" }
        })
    );
}

#[tokio::test]
async fn create_then_delete_round_trip() {
    let env = init_test_env_with(json!({ "contacts": [{ "id": 5, "name": "Eve" }] }), EnvMode::Test);

    let (_, created) = env
        .call_json(Method::POST, "/api/contacts", Some(r#"{ "name": "Max" }"#))
        .await;
    let id = created["data"]["id"].as_i64().expect("id entier");
    assert_eq!(id, 6);

    let (_, body) = env.call_json(Method::GET, "/api/contacts", None).await;
    assert!(body.as_array().unwrap().iter().any(|r| r["id"] == id));

    env.call_json(Method::DELETE, &format!("/api/contacts/{}", id), None)
        .await;
    let (_, body) = env.call_json(Method::GET, "/api/contacts", None).await;
    assert_eq!(body, json!([{ "id": 5, "name": "Eve" }]));
}
