//! # Backend API Services
//!
//! One module per resource group, mirroring the REST surface. Each module
//! exposes free functions over a shared [`ApiClient`]; the
//! [`crate::core::service::ApiService`] implementation on `ApiClient`
//! delegates to them.

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod client;
pub mod events;
pub mod notifications;
pub mod reports;
pub mod students;
pub mod transactions;

pub use client::ApiClient;

use serde::de::DeserializeOwned;
use shared::{ErrorResponse, ListResponse};

use crate::core::error::ApiError;

/// Turn a response into `T`, mapping non-2xx statuses to [`ApiError`].
///
/// Error bodies are expected to carry a `message` field; when they do not
/// parse (HTML error pages, empty 5xx bodies) a generic message keyed off
/// the status class is used instead so the caller always gets something
/// presentable.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(ApiError::decode)
    } else {
        Err(error_from(status, response).await)
    }
}

/// Like [`parse_json`] but discards any success body.
pub(crate) async fn parse_unit(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(error_from(status, response).await)
    }
}

/// Parse a list endpoint that may return a bare array or a page envelope.
pub(crate) async fn parse_list<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Vec<T>, ApiError> {
    parse_json::<ListResponse<T>>(response)
        .await
        .map(ListResponse::into_items)
}

/// Download a binary body (report exports).
pub(crate) async fn parse_bytes(response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(ApiError::decode)
    } else {
        Err(error_from(status, response).await)
    }
}

async fn error_from(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
    let fallback = if status.is_server_error() {
        "Server error, please try again later".to_string()
    } else {
        format!("Request failed with status {}", status.as_u16())
    };

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) if !body.message.trim().is_empty() => body.message,
        _ => fallback,
    };

    tracing::warn!(status = status.as_u16(), error = %message, "API request failed");
    ApiError::status(status.as_u16(), message)
}
