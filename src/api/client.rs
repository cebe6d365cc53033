//! HTTP API Client
//!
//! Functions for communicating with the sales analytics API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::state::global::DashboardSummary;
use crate::state::prediction::{parse_prediction_body, PredictionRequest};

/// Default API base URL (the analytics service's address)
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("salesboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("salesboard_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

// ============ API Functions ============

/// Fetch the dashboard summary figures
pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, String> {
    fetch_json(&format!("{}/dashboard", get_api_base())).await
}

/// Fetch total sales per country
pub async fn fetch_country_sales() -> Result<HashMap<String, f64>, String> {
    fetch_json(&format!("{}/country-sales", get_api_base())).await
}

/// Fetch total sales per product line
pub async fn fetch_product_sales() -> Result<HashMap<String, f64>, String> {
    fetch_json(&format!("{}/product-sales", get_api_base())).await
}

/// Fetch total sales per calendar month, keyed "{year}-{month}"
pub async fn fetch_monthly_sales() -> Result<HashMap<String, f64>, String> {
    fetch_json(&format!("{}/monthly-sales", get_api_base())).await
}

/// Request a sales prediction for one feature record.
///
/// Issues exactly one POST and awaits its single response; there is no
/// retry, timeout, or coordination between overlapping calls. Any failure
/// (network, non-success status, non-numeric payload) comes back as `Err`.
pub async fn predict_sales(request: &PredictionRequest) -> Result<f64, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict", api_base))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    parse_prediction_body(&body)
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/test", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// GET a JSON body, mapping error payloads to their message
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
