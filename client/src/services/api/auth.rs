//! # Authentication Endpoints
//!
//! Login, registration, logout, token refresh and verification.

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, VerifyResponse};

use super::client::ApiClient;
use super::{parse_json, parse_unit};
use crate::core::error::ApiError;

/// Login with institutional email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = client
        .request(Method::POST, "/auth/login")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            ApiError::network(e)
        })?;

    let result = parse_json::<AuthResponse>(response).await;
    match &result {
        Ok(_) => tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful"),
        Err(e) => tracing::warn!(status = ?e.status, error = %e, "Login failed"),
    }
    result
}

/// Register a new student account.
pub async fn register(
    client: &ApiClient,
    request: RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    let response = client
        .request(Method::POST, "/auth/register")
        .json(&request)
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Invalidate the current session server-side.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let response = client
        .request(Method::POST, "/auth/logout")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_unit(response).await
}

/// Exchange a refresh token for a new access token.
pub async fn refresh(
    client: &ApiClient,
    request: RefreshRequest,
) -> Result<RefreshResponse, ApiError> {
    let response = client
        .request(Method::POST, "/auth/refresh")
        .json(&request)
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Verify the current access token.
pub async fn verify(client: &ApiClient) -> Result<VerifyResponse, ApiError> {
    let response = client
        .request(Method::GET, "/auth/verify")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}
