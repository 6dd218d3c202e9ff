//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::client_config;
use serde::Serialize;

/// Get the base URL for API requests
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/customers/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    client_config().api_base.clone()
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build a full API URL with a query string, e.g. `?name=ivanov`
pub fn api_url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(join_query(&api_url(path), &qs))
}

fn join_query(url: &str, qs: &str) -> String {
    if qs.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, qs)
    }
}
