//! # Student and Academic Endpoints

use reqwest::Method;
use shared::{AcademicProgress, StudentProfile};

use super::client::ApiClient;
use super::parse_json;
use crate::core::error::ApiError;

/// Fetch a student profile.
pub async fn profile(client: &ApiClient, id: i64) -> Result<StudentProfile, ApiError> {
    let response = client
        .request(Method::GET, &format!("/students/{}", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Fetch academic progress (credits, GPA, requirement flags).
pub async fn progress(client: &ApiClient, id: i64) -> Result<AcademicProgress, ApiError> {
    let response = client
        .request(Method::GET, &format!("/students/{}/progress", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}
