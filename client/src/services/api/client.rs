//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder};
use shared::{
    Account, AcademicProgress, AuthResponse, BalanceResponse, Category, CategoryRequest,
    CreateTransactionRequest, Event, ExportFormat, GlobalStatistics, LoginRequest, MonthlySummary,
    Notification, Page, RankingEntry, RefreshRequest, RefreshResponse, RegisterRequest,
    RegistrationResponse, ReportRequest, StudentProfile, Transaction, TransactionKind,
    TransactionTotals, VerifyResponse,
};

use crate::core::error::ApiError;
use crate::core::service::ApiService;

/// Default base URL for the backend API.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Request timeout. The backend can be slow generating reports, so this is
/// deliberately generous.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the DUNAB backend.
///
/// Holds a connection pool plus the bearer token of the active session; the
/// token is set after login and cleared on logout, and every request issued
/// through this client carries it automatically.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client against `DUNAB_API_BASE_URL` or the default base URL.
    pub fn new() -> Self {
        let base_url =
            std::env::var("DUNAB_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        ApiClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    /// Store the bearer token of a freshly authenticated session.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the stored bearer token (logout, forced or voluntary).
    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path` (leading slash), bearer token attached
    /// when a session is active.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        super::auth::login(self, request).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        super::auth::register(self, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        super::auth::logout(self).await
    }

    async fn refresh(&self, request: RefreshRequest) -> Result<RefreshResponse, ApiError> {
        super::auth::refresh(self, request).await
    }

    async fn verify(&self) -> Result<VerifyResponse, ApiError> {
        super::auth::verify(self).await
    }

    async fn account_for_owner(&self, owner_id: i64) -> Result<Account, ApiError> {
        super::accounts::account_for_owner(self, owner_id).await
    }

    async fn balance(&self, account_id: i64) -> Result<BalanceResponse, ApiError> {
        super::accounts::balance(self, account_id).await
    }

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        super::transactions::create(self, request).await
    }

    async fn transaction(&self, id: i64) -> Result<Transaction, ApiError> {
        super::transactions::by_id(self, id).await
    }

    async fn my_transactions(&self, page: u32, size: u32) -> Result<Vec<Transaction>, ApiError> {
        super::transactions::mine(self, page, size).await
    }

    async fn user_transactions(
        &self,
        user_id: i64,
        page: u32,
        size: u32,
    ) -> Result<Vec<Transaction>, ApiError> {
        super::transactions::for_user(self, user_id, page, size).await
    }

    async fn account_transactions(&self, account_id: i64) -> Result<Vec<Transaction>, ApiError> {
        super::transactions::for_account(self, account_id).await
    }

    async fn account_transactions_paginated(
        &self,
        account_id: i64,
        page: u32,
        size: u32,
        sort: &str,
    ) -> Result<Page<Transaction>, ApiError> {
        super::transactions::for_account_paginated(self, account_id, page, size, sort).await
    }

    async fn recent_transactions(
        &self,
        account_id: i64,
        limit: usize,
    ) -> Result<Vec<Transaction>, ApiError> {
        super::transactions::recent(self, account_id, limit).await
    }

    async fn filter_transactions(
        &self,
        account_id: i64,
        date_from: Option<&str>,
        date_to: Option<&str>,
        kind: Option<TransactionKind>,
        category_id: Option<i64>,
    ) -> Result<Vec<Transaction>, ApiError> {
        super::transactions::filter(self, account_id, date_from, date_to, kind, category_id).await
    }

    async fn cancel_transaction(&self, id: i64, reason: &str) -> Result<Transaction, ApiError> {
        super::transactions::cancel(self, id, reason).await
    }

    async fn transaction_totals(&self, account_id: i64) -> Result<TransactionTotals, ApiError> {
        super::transactions::totals(self, account_id).await
    }

    async fn monthly_summary(&self, account_id: i64) -> Result<Vec<MonthlySummary>, ApiError> {
        super::transactions::monthly_summary(self, account_id).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        super::categories::list(self).await
    }

    async fn create_category(&self, request: CategoryRequest) -> Result<Category, ApiError> {
        super::categories::create(self, request).await
    }

    async fn update_category(
        &self,
        id: i64,
        request: CategoryRequest,
    ) -> Result<Category, ApiError> {
        super::categories::update(self, id, request).await
    }

    async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        super::categories::delete(self, id).await
    }

    async fn student_profile(&self, id: i64) -> Result<StudentProfile, ApiError> {
        super::students::profile(self, id).await
    }

    async fn academic_progress(&self, id: i64) -> Result<AcademicProgress, ApiError> {
        super::students::progress(self, id).await
    }

    async fn events(&self) -> Result<Vec<Event>, ApiError> {
        super::events::list(self).await
    }

    async fn event(&self, id: i64) -> Result<Event, ApiError> {
        super::events::by_id(self, id).await
    }

    async fn register_for_event(&self, id: i64) -> Result<RegistrationResponse, ApiError> {
        super::events::register(self, id).await
    }

    async fn confirm_attendance(&self, id: i64) -> Result<RegistrationResponse, ApiError> {
        super::events::confirm(self, id).await
    }

    async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        super::notifications::list(self).await
    }

    async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError> {
        super::notifications::mark_read(self, id).await
    }

    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        super::notifications::mark_all_read(self).await
    }

    async fn delete_notification(&self, id: i64) -> Result<(), ApiError> {
        super::notifications::delete(self, id).await
    }

    async fn delete_read_notifications(&self) -> Result<(), ApiError> {
        super::notifications::delete_read(self).await
    }

    async fn unread_count(&self) -> Result<u64, ApiError> {
        super::notifications::unread_count(self).await
    }

    async fn global_statistics(&self) -> Result<GlobalStatistics, ApiError> {
        super::reports::statistics(self).await
    }

    async fn ranking(&self, limit: usize) -> Result<Vec<RankingEntry>, ApiError> {
        super::reports::ranking(self, limit).await
    }

    async fn export_report(
        &self,
        request: ReportRequest,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ApiError> {
        super::reports::export(self, request, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trimming() {
        let client = ApiClient::with_base_url("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_token_lifecycle() {
        let client = ApiClient::with_base_url("http://localhost:8080/api");
        assert!(client.token.read().is_none());
        client.set_token("jwt");
        assert_eq!(client.token.read().as_deref(), Some("jwt"));
        client.clear_token();
        assert!(client.token.read().is_none());
    }
}
