//! # Transaction Endpoints
//!
//! Create, fetch, list, filter and cancel DUNAB transactions, plus the
//! aggregate endpoints (totals, monthly summary).

use reqwest::Method;
use shared::{
    CreateTransactionRequest, MonthlySummary, Page, Transaction, TransactionKind,
    TransactionTotals,
};

use super::client::ApiClient;
use super::{parse_json, parse_list};
use crate::core::error::ApiError;

/// Create a transaction. The backend validates balance and returns the
/// canonical record with server-assigned id, status and timestamps.
#[tracing::instrument(skip(client, request), fields(account_id = request.account_id, kind = request.kind.as_tag()))]
pub async fn create(
    client: &ApiClient,
    request: CreateTransactionRequest,
) -> Result<Transaction, ApiError> {
    let response = client
        .request(Method::POST, "/dunab/transactions")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Create transaction network error");
            ApiError::network(e)
        })?;

    let result = parse_json::<Transaction>(response).await;
    if let Ok(tx) = &result {
        tracing::info!(id = tx.id, amount = tx.amount, "Transaction created");
    }
    result
}

/// Fetch a single transaction by id.
pub async fn by_id(client: &ApiClient, id: i64) -> Result<Transaction, ApiError> {
    let response = client
        .request(Method::GET, &format!("/dunab/transactions/{}", id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Transactions of the authenticated user.
pub async fn mine(client: &ApiClient, page: u32, size: u32) -> Result<Vec<Transaction>, ApiError> {
    let response = client
        .request(Method::GET, "/dunab/transactions/mine")
        .query(&[("page", page), ("size", size)])
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Transactions of a specific user (admin view).
pub async fn for_user(
    client: &ApiClient,
    user_id: i64,
    page: u32,
    size: u32,
) -> Result<Vec<Transaction>, ApiError> {
    let response = client
        .request(Method::GET, &format!("/dunab/transactions/user/{}", user_id))
        .query(&[("page", page), ("size", size)])
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// All transactions of an account.
pub async fn for_account(
    client: &ApiClient,
    account_id: i64,
) -> Result<Vec<Transaction>, ApiError> {
    let response = client
        .request(Method::GET, &format!("/dunab/transactions/cuenta/{}", account_id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Server-side paginated transactions of an account.
///
/// `sort` uses the backend's `field,direction` convention, e.g.
/// `fechaCreacion,desc`.
pub async fn for_account_paginated(
    client: &ApiClient,
    account_id: i64,
    page: u32,
    size: u32,
    sort: &str,
) -> Result<Page<Transaction>, ApiError> {
    let response = client
        .request(
            Method::GET,
            &format!("/dunab/transactions/cuenta/{}/paginado", account_id),
        )
        .query(&[
            ("page", page.to_string()),
            ("size", size.to_string()),
            ("sort", sort.to_string()),
        ])
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Most recent transactions of an account, newest first.
pub async fn recent(
    client: &ApiClient,
    account_id: i64,
    limit: usize,
) -> Result<Vec<Transaction>, ApiError> {
    let response = client
        .request(
            Method::GET,
            &format!("/dunab/transactions/cuenta/{}/recientes", account_id),
        )
        .query(&[("limit", limit)])
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Server-side filtered transactions of an account. All criteria optional.
pub async fn filter(
    client: &ApiClient,
    account_id: i64,
    date_from: Option<&str>,
    date_to: Option<&str>,
    kind: Option<TransactionKind>,
    category_id: Option<i64>,
) -> Result<Vec<Transaction>, ApiError> {
    let mut query: Vec<(&str, String)> = vec![("cuentaId", account_id.to_string())];
    if let Some(from) = date_from {
        query.push(("fechaInicio", from.to_string()));
    }
    if let Some(to) = date_to {
        query.push(("fechaFin", to.to_string()));
    }
    if let Some(kind) = kind {
        query.push(("tipo", kind.as_tag().to_string()));
    }
    if let Some(category_id) = category_id {
        query.push(("categoriaId", category_id.to_string()));
    }

    let response = client
        .request(Method::GET, "/dunab/transactions/filter")
        .query(&query)
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}

/// Cancel (soft-delete) a transaction with a justification.
pub async fn cancel(client: &ApiClient, id: i64, reason: &str) -> Result<Transaction, ApiError> {
    let response = client
        .request(Method::DELETE, &format!("/dunab/transactions/{}", id))
        .query(&[("justificacion", reason)])
        .send()
        .await
        .map_err(ApiError::network)?;

    let result = parse_json::<Transaction>(response).await;
    if result.is_ok() {
        tracing::info!(id, reason, "Transaction cancelled");
    }
    result
}

/// Aggregate credit/debit totals of an account.
pub async fn totals(client: &ApiClient, account_id: i64) -> Result<TransactionTotals, ApiError> {
    let response = client
        .request(Method::GET, &format!("/dunab/statistics/{}", account_id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Monthly credit/debit summary of an account.
pub async fn monthly_summary(
    client: &ApiClient,
    account_id: i64,
) -> Result<Vec<MonthlySummary>, ApiError> {
    let response = client
        .request(
            Method::GET,
            &format!("/dunab/statistics/{}/monthly", account_id),
        )
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_list(response).await
}
