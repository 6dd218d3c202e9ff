//! Thin wrapper over `gloo_net` shared by the customer and order APIs.
//!
//! Every request asks for JSON and bypasses HTTP caches. Non-success
//! statuses become [`ApiError`] via [`ApiError::from_status`].

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn with_headers(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = with_headers(Request::get(url))
        .send()
        .await
        .map_err(ApiError::network)?;
    read_json(url, response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    let response = with_headers(Request::post(url))
        .json(body)
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;
    read_json(url, response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("PUT {}", url);
    let response = with_headers(Request::put(url))
        .json(body)
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;
    read_json(url, response).await
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {}", url);
    let response = with_headers(Request::delete(url))
        .send()
        .await
        .map_err(ApiError::network)?;
    if response.ok() {
        return Ok(());
    }
    Err(error_from(url, response).await)
}

/// 204 on a read means "nothing there" and is reported as [`ApiError::NoContent`].
async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    if !response.ok() || response.status() == 204 {
        return Err(error_from(url, response).await);
    }
    let text = response.text().await.map_err(ApiError::network)?;
    serde_json::from_str(&text).map_err(|e| {
        log::error!("Failed to parse response of {}: {}", url, e);
        ApiError::decode(e)
    })
}

async fn error_from(url: &str, response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    if err.is_no_data() {
        log::debug!("{} -> HTTP {} (no data)", url, status);
    } else {
        log::warn!("{} -> HTTP {}: {}", url, status, body);
    }
    err
}
