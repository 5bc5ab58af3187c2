//! # DUNAB Account Endpoints

use reqwest::Method;
use shared::{Account, BalanceResponse};

use super::client::ApiClient;
use super::parse_json;
use crate::core::error::ApiError;

/// Fetch the DUNAB account owned by a user.
pub async fn account_for_owner(client: &ApiClient, owner_id: i64) -> Result<Account, ApiError> {
    let response = client
        .request(Method::GET, &format!("/dunab/accounts/{}", owner_id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}

/// Fetch the current balance of an account.
pub async fn balance(client: &ApiClient, account_id: i64) -> Result<BalanceResponse, ApiError> {
    let response = client
        .request(Method::GET, &format!("/dunab/accounts/{}/balance", account_id))
        .send()
        .await
        .map_err(ApiError::network)?;

    parse_json(response).await
}
