//! Coupon Feed API Integration Tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use storefront_server::store::DocumentStore;
use storefront_server::{api, AppState};

fn setup_test_app() -> (axum::Router, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let state = Arc::new(AppState::new(DocumentStore::new(temp_dir.path())));
    let app = api::router().with_state(state);
    (app, temp_dir)
}

async fn get_coupons(app: &axum::Router) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri("/api/coupons")
        .body(Body::empty())
        .unwrap();
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

#[tokio::test]
async fn test_first_read_seeds_demo_coupons() {
    let (app, temp_dir) = setup_test_app();

    let (status, body) = get_coupons(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["success"].as_bool().unwrap());

    let coupons = body["coupons"].as_array().unwrap();
    assert!(!coupons.is_empty());
    assert!(coupons[0]["businessId"].is_string());
    assert!(coupons[0]["redemptionCode"].is_string());

    assert!(temp_dir.path().join("coupons.json").exists());
}

#[tokio::test]
async fn test_feed_reads_back_the_seeded_document() {
    let (app, _temp_dir) = setup_test_app();

    let (_, first) = get_coupons(&app).await;
    let (status, second) = get_coupons(&app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["coupons"], second["coupons"]);
}
