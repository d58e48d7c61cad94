//! HTTP API Client
//!
//! Functions for communicating with the Pawhaven REST API.

use gloo_net::http::Request;

use crate::api::types::{
    AnalyticsSnapshot, AnalyticsStatus, Application, DateRange, Puppy, PuppyStatus,
};
use crate::state::session::AdminSession;

/// Production API origin, used when nothing else applies
pub const PRODUCTION_API_BASE: &str = "https://api.pawhaven.com";

/// Local development API origin, used when the site is served from localhost
pub const LOCAL_API_BASE: &str = "http://localhost:3000";

/// Build-time override for the API origin
const API_BASE_OVERRIDE: Option<&str> = option_env!("PAWHAVEN_API_URL");

/// Pick the API origin for a given override and page hostname
pub fn api_base_for(env_override: Option<&str>, hostname: &str) -> String {
    let url = match env_override {
        Some(url) if !url.is_empty() => url,
        _ if hostname == "localhost" || hostname == "127.0.0.1" => LOCAL_API_BASE,
        _ => PRODUCTION_API_BASE,
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Get the API origin for the current page
pub fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .unwrap_or_default();
    api_base_for(API_BASE_OVERRIDE, &hostname)
}

/// Error body shape the API uses for non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Fetch the puppy inventory
pub async fn fetch_puppies() -> Result<Vec<Puppy>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/puppies", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Change a puppy's adoption status (admin only)
pub async fn update_puppy_status(
    session: &AdminSession,
    id: &str,
    status: PuppyStatus,
) -> Result<Puppy, String> {
    #[derive(serde::Serialize)]
    struct StatusRequest {
        status: PuppyStatus,
    }

    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/api/puppies/{}", api_base, id))
        .header("admin_token", session.token())
        .json(&StatusRequest { status })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Update failed".to_string() });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the adoption applications list
pub async fn fetch_applications() -> Result<Vec<Application>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/applications", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string() });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check whether GA4 reporting is configured on the backend
pub async fn fetch_analytics_status() -> Result<AnalyticsStatus, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/analytics/ga4/status", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Analytics status check failed".to_string());
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Path and query for the comprehensive snapshot endpoint
fn comprehensive_path(range: DateRange) -> String {
    format!(
        "/api/analytics/ga4/comprehensive?startDate={}&endDate=today",
        range.start_param()
    )
}

/// Fetch the comprehensive GA4 snapshot for a date range
pub async fn fetch_analytics_comprehensive(
    range: DateRange,
) -> Result<AnalyticsSnapshot, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}{}", api_base, comprehensive_path(range)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Analytics request failed".to_string() });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_fallbacks() {
        let base = api_base_for(Some("https://staging.pawhaven.com/"), "pawhaven.com");
        assert_eq!(base, "https://staging.pawhaven.com");
    }

    #[test]
    fn empty_override_is_ignored() {
        let base = api_base_for(Some(""), "pawhaven.com");
        assert_eq!(base, PRODUCTION_API_BASE);
    }

    #[test]
    fn localhost_uses_local_fallback() {
        assert_eq!(api_base_for(None, "localhost"), LOCAL_API_BASE);
        assert_eq!(api_base_for(None, "127.0.0.1"), LOCAL_API_BASE);
    }

    #[test]
    fn anything_else_uses_production_fallback() {
        assert_eq!(api_base_for(None, "www.pawhaven.com"), PRODUCTION_API_BASE);
        assert_eq!(api_base_for(None, ""), PRODUCTION_API_BASE);
    }

    #[test]
    fn comprehensive_query_follows_range_selection() {
        let path = comprehensive_path(DateRange { days: 90 });
        assert_eq!(
            path,
            "/api/analytics/ga4/comprehensive?startDate=90daysAgo&endDate=today"
        );
    }
}
