//! HTTP API routes for the storefront server.
//!
//! The personalization endpoints implement the persistence-backend contract
//! the UI engine consumes: whole-document reads and overwrites keyed by a
//! single fixed document, no partial merge.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use shared_types::{CouponFeedResponse, CustomizationMap};
use tracing::error;

use crate::AppState;

/// Configure all API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/personalizations",
            get(get_personalizations)
                .post(save_personalizations)
                .delete(clear_personalizations),
        )
        .route("/api/coupons", get(get_coupons))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "storefront-server",
    }))
}

/// GET /api/personalizations — the full persisted document
async fn get_personalizations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.read_personalizations().await)
}

/// POST /api/personalizations — overwrite the document with the submitted map
async fn save_personalizations(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let Some(raw) = body.get("customizations").filter(|v| v.is_object()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid customizations data" })),
        )
            .into_response();
    };

    let customizations: CustomizationMap = match serde_json::from_value(raw.clone()) {
        Ok(map) => map,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("Invalid customizations data: {e}") })),
            )
                .into_response();
        }
    };

    match state.store.write_personalizations(customizations).await {
        Ok(last_updated) => Json(json!({
            "success": true,
            "lastUpdated": last_updated,
        }))
        .into_response(),
        Err(e) => {
            error!("save personalizations: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to save personalizations" })),
            )
                .into_response()
        }
    }
}

/// DELETE /api/personalizations — reset the document to its empty state
async fn clear_personalizations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.clear_personalizations().await {
        Ok(last_updated) => Json(json!({
            "success": true,
            "lastUpdated": last_updated,
        }))
        .into_response(),
        Err(e) => {
            error!("clear personalizations: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to clear personalizations" })),
            )
                .into_response()
        }
    }
}

/// GET /api/coupons — the storefront coupon feed
async fn get_coupons(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.read_coupons().await {
        Ok(coupons) => Json(CouponFeedResponse {
            success: true,
            coupons,
        })
        .into_response(),
        Err(e) => {
            error!("read coupons: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to read coupons" })),
            )
                .into_response()
        }
    }
}
