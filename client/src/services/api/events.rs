//! # Event Endpoints

use reqwest::Method;
use shared::{Event, RegistrationResponse};

use super::client::ApiClient;
use super::{parse_json, parse_list};
use crate::core::error::ApiError;

/// List events.
pub async fn list(client: &ApiClient) -> Result<Vec<Event>, ApiError> {
    let response = client
        .request(Method::GET, "/events")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Fetch a single event.
pub async fn by_id(client: &ApiClient, id: i64) -> Result<Event, ApiError> {
    let response = client
        .request(Method::GET, &format!("/events/{}", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Register the authenticated user for an event.
pub async fn register(client: &ApiClient, id: i64) -> Result<RegistrationResponse, ApiError> {
    let response = client
        .request(Method::POST, &format!("/events/{}/register", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    let result = parse_json::<RegistrationResponse>(response).await;
    if result.is_ok() {
        tracing::info!(event_id = id, "Registered for event");
    }
    result
}

/// Confirm attendance at an event; the backend credits the reward.
pub async fn confirm(client: &ApiClient, id: i64) -> Result<RegistrationResponse, ApiError> {
    let response = client
        .request(Method::POST, &format!("/events/{}/confirm", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}
