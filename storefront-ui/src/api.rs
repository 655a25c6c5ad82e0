use gloo_net::http::Request;
use shared_types::{
    Coupon, CouponFeedResponse, CustomizationMap, PersonalizationsDocument,
    SavePersonalizationsRequest, SavePersonalizationsResponse,
};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (the server serves the static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Fetch the persisted personalization document.
pub async fn fetch_personalizations() -> Result<PersonalizationsDocument, String> {
    let url = format!("{}/api/personalizations", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Persist the entire customization map. Always the whole map, never a diff.
pub async fn save_personalizations(
    customizations: &CustomizationMap,
) -> Result<SavePersonalizationsResponse, String> {
    let url = format!("{}/api/personalizations", api_base());

    let request = SavePersonalizationsRequest {
        customizations: customizations.clone(),
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SavePersonalizationsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(data)
}

/// Reset the persisted personalization document.
pub async fn clear_personalizations() -> Result<(), String> {
    let url = format!("{}/api/personalizations", api_base());

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

/// Fetch the storefront coupon feed.
pub async fn fetch_coupons() -> Result<Vec<Coupon>, String> {
    let url = format!("{}/api/coupons", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CouponFeedResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if !data.success {
        return Err("API returned success=false".to_string());
    }

    Ok(data.coupons)
}
