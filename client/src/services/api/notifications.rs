//! # Notification Endpoints

use reqwest::Method;
use shared::{Notification, UnreadCountResponse};

use super::client::ApiClient;
use super::{parse_json, parse_list, parse_unit};
use crate::core::error::ApiError;

/// List the current user's notifications, oldest first.
pub async fn list(client: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    let response = client
        .request(Method::GET, "/notifications")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Mark one notification as read.
pub async fn mark_read(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    let response = client
        .request(Method::PUT, &format!("/notifications/{}/read", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_unit(response).await
}

/// Mark every notification as read.
pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiError> {
    let response = client
        .request(Method::PUT, "/notifications/read-all")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_unit(response).await
}

/// Delete one notification.
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    let response = client
        .request(Method::DELETE, &format!("/notifications/{}", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_unit(response).await
}

/// Delete every notification already read.
pub async fn delete_read(client: &ApiClient) -> Result<(), ApiError> {
    let response = client
        .request(Method::DELETE, "/notifications/read")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_unit(response).await
}

/// Unread notification counter.
pub async fn unread_count(client: &ApiClient) -> Result<u64, ApiError> {
    let response = client
        .request(Method::GET, "/notifications/unread-count")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json::<UnreadCountResponse>(response)
        .await
        .map(|body| body.count)
}
