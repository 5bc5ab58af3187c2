//! # Statistics, Ranking and Report Endpoints

use reqwest::Method;
use shared::{ExportFormat, GlobalStatistics, RankingEntry, ReportRequest};

use super::client::ApiClient;
use super::{parse_bytes, parse_json, parse_list};
use crate::core::error::ApiError;

/// Campus-wide transaction statistics (coordinator dashboard).
pub async fn statistics(client: &ApiClient) -> Result<GlobalStatistics, ApiError> {
    let response = client
        .request(Method::GET, "/dunab/statistics")
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Top account balances.
pub async fn ranking(client: &ApiClient, limit: usize) -> Result<Vec<RankingEntry>, ApiError> {
    let response = client
        .request(Method::GET, "/dunab/ranking")
        .query(&[("limit", limit)])
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Generate a report and download it as raw bytes (CSV or PDF).
#[tracing::instrument(skip(client, request), fields(kind = ?request.kind, format = format.as_query()))]
pub async fn export(
    client: &ApiClient,
    request: ReportRequest,
    format: ExportFormat,
) -> Result<Vec<u8>, ApiError> {
    let response = client
        .request(Method::POST, "/dunab/reports")
        .query(&[("format", format.as_query())])
        .json(&request)
        .send()
        .await
        .map_err(ApiError::network)?;

    let bytes = parse_bytes(response).await?;
    tracing::info!(size = bytes.len(), "Report downloaded");
    Ok(bytes)
}
