//! # Category Endpoints

use reqwest::Method;
use shared::{Category, CategoryRequest};

use super::client::ApiClient;
use super::{parse_json, parse_list, parse_unit};
use crate::core::error::ApiError;

/// List all transaction categories.
pub async fn list(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let response = client
        .request(Method::GET, "/dunab/categories")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Create a category (admin).
pub async fn create(client: &ApiClient, request: CategoryRequest) -> Result<Category, ApiError> {
    let response = client
        .request(Method::POST, "/dunab/categories")
        .json(&request)
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Update a category (admin).
pub async fn update(
    client: &ApiClient,
    id: i64,
    request: CategoryRequest,
) -> Result<Category, ApiError> {
    let response = client
        .request(Method::PUT, &format!("/dunab/categories/{}", id))
        .json(&request)
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Delete a category (admin).
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    let response = client
        .request(Method::DELETE, &format!("/dunab/categories/{}", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_unit(response).await
}
