//! Personalizations API Integration Tests
//!
//! Tests full HTTP request/response cycles for the persistence-backend
//! contract the UI engine consumes: GET reads the whole document, POST
//! overwrites it, DELETE resets it.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use storefront_server::store::DocumentStore;
use storefront_server::{api, AppState};

fn setup_test_app() -> (axum::Router, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let state = Arc::new(AppState::new(DocumentStore::new(temp_dir.path())));
    let app = api::router().with_state(state);
    (app, temp_dir)
}

async fn json_response(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&body).expect("Invalid JSON response");
    (status, value)
}

fn get_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/personalizations")
        .body(Body::empty())
        .unwrap()
}

fn post_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/personalizations")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _temp_dir) = setup_test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "storefront-server");
}

#[tokio::test]
async fn test_get_on_fresh_store_returns_empty_default() {
    let (app, _temp_dir) = setup_test_app();

    let (status, body) = json_response(&app, get_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customizations"], json!({}));
    assert_eq!(body["lastUpdated"], Value::Null);
}

#[tokio::test]
async fn test_save_then_read_roundtrip() {
    let (app, _temp_dir) = setup_test_app();

    // The exact payload the engine serializes after one fontSize edit.
    let payload = json!({
        "customizations": { "hero-title": { "fontSize": 40 } }
    });

    let (status, body) = json_response(&app, post_request(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["success"].as_bool().unwrap());
    assert!(body["lastUpdated"].is_string());

    let (status, body) = json_response(&app, get_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["customizations"],
        json!({ "hero-title": { "fontSize": 40 } })
    );
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
async fn test_save_overwrites_whole_document() {
    let (app, _temp_dir) = setup_test_app();

    let first = json!({
        "customizations": {
            "hero-title": { "fontSize": 40 },
            "header-title": { "color": "#112233" }
        }
    });
    let (status, _) = json_response(&app, post_request(first)).await;
    assert_eq!(status, StatusCode::OK);

    // A later save replaces the document; it does not merge.
    let second = json!({
        "customizations": { "hero-title": { "fontSize": 48 } }
    });
    let (status, _) = json_response(&app, post_request(second)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = json_response(&app, get_request()).await;
    assert_eq!(
        body["customizations"],
        json!({ "hero-title": { "fontSize": 48 } })
    );
}

#[tokio::test]
async fn test_save_without_customizations_is_rejected() {
    let (app, _temp_dir) = setup_test_app();

    let (status, body) = json_response(&app, post_request(json!({ "other": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_save_with_non_object_customizations_is_rejected() {
    let (app, _temp_dir) = setup_test_app();

    let (status, body) =
        json_response(&app, post_request(json!({ "customizations": "nope" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_delete_resets_populated_document() {
    let (app, _temp_dir) = setup_test_app();

    let payload = json!({
        "customizations": { "hero-title": { "fontSize": 40 } }
    });
    let (status, _) = json_response(&app, post_request(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/personalizations")
        .body(Body::empty())
        .unwrap();
    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["success"].as_bool().unwrap());
    assert!(body["lastUpdated"].is_string());

    let (_, body) = json_response(&app, get_request()).await;
    assert_eq!(body["customizations"], json!({}));
    // Reset stamps the document; it is not the same as "never written".
    assert!(body["lastUpdated"].is_string());
}
