//! # Service Traits
//!
//! The [`ApiService`] trait abstracts the backend API for dependency
//! injection: handlers and tasks only ever see the trait, so tests can
//! substitute a mock without touching the network.

use async_trait::async_trait;
use shared::{
    Account, AcademicProgress, AuthResponse, BalanceResponse, Category, CategoryRequest,
    CreateTransactionRequest, Event, GlobalStatistics, LoginRequest, MonthlySummary, Notification,
    Page, RankingEntry, RefreshRequest, RefreshResponse, RegisterRequest, RegistrationResponse,
    ReportRequest, ExportFormat, StudentProfile, Transaction, TransactionKind, TransactionTotals,
    VerifyResponse,
};

use crate::core::error::ApiError;

/// Backend API operations, grouped the way the REST surface is.
#[async_trait]
pub trait ApiService: Send + Sync {
    // ---- auth ----

    /// Login with institutional email and password.
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Register a new student account.
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Invalidate the current session server-side.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Exchange a refresh token for a new access token.
    async fn refresh(&self, request: RefreshRequest) -> Result<RefreshResponse, ApiError>;

    /// Verify the current access token.
    async fn verify(&self) -> Result<VerifyResponse, ApiError>;

    // ---- accounts ----

    /// Fetch the DUNAB account owned by a user.
    async fn account_for_owner(&self, owner_id: i64) -> Result<Account, ApiError>;

    /// Fetch the current balance of an account.
    async fn balance(&self, account_id: i64) -> Result<BalanceResponse, ApiError>;

    // ---- transactions ----

    /// Create a transaction; the backend returns the canonical record.
    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, ApiError>;

    /// Fetch a single transaction.
    async fn transaction(&self, id: i64) -> Result<Transaction, ApiError>;

    /// Transactions of the authenticated user.
    async fn my_transactions(&self, page: u32, size: u32) -> Result<Vec<Transaction>, ApiError>;

    /// Transactions of a specific user (admin).
    async fn user_transactions(
        &self,
        user_id: i64,
        page: u32,
        size: u32,
    ) -> Result<Vec<Transaction>, ApiError>;

    /// All transactions of an account.
    async fn account_transactions(&self, account_id: i64) -> Result<Vec<Transaction>, ApiError>;

    /// Server-side paginated transactions of an account.
    async fn account_transactions_paginated(
        &self,
        account_id: i64,
        page: u32,
        size: u32,
        sort: &str,
    ) -> Result<Page<Transaction>, ApiError>;

    /// Most recent transactions of an account, newest first.
    async fn recent_transactions(
        &self,
        account_id: i64,
        limit: usize,
    ) -> Result<Vec<Transaction>, ApiError>;

    /// Server-side filtered transactions of an account.
    async fn filter_transactions(
        &self,
        account_id: i64,
        date_from: Option<&str>,
        date_to: Option<&str>,
        kind: Option<TransactionKind>,
        category_id: Option<i64>,
    ) -> Result<Vec<Transaction>, ApiError>;

    /// Cancel (soft-delete) a transaction with a justification.
    async fn cancel_transaction(&self, id: i64, reason: &str) -> Result<Transaction, ApiError>;

    /// Aggregate totals of an account.
    async fn transaction_totals(&self, account_id: i64) -> Result<TransactionTotals, ApiError>;

    /// Monthly credit/debit summary of an account.
    async fn monthly_summary(&self, account_id: i64) -> Result<Vec<MonthlySummary>, ApiError>;

    // ---- categories ----

    async fn categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn create_category(&self, request: CategoryRequest) -> Result<Category, ApiError>;

    async fn update_category(
        &self,
        id: i64,
        request: CategoryRequest,
    ) -> Result<Category, ApiError>;

    async fn delete_category(&self, id: i64) -> Result<(), ApiError>;

    // ---- students ----

    async fn student_profile(&self, id: i64) -> Result<StudentProfile, ApiError>;

    async fn academic_progress(&self, id: i64) -> Result<AcademicProgress, ApiError>;

    // ---- events ----

    async fn events(&self) -> Result<Vec<Event>, ApiError>;

    async fn event(&self, id: i64) -> Result<Event, ApiError>;

    async fn register_for_event(&self, id: i64) -> Result<RegistrationResponse, ApiError>;

    async fn confirm_attendance(&self, id: i64) -> Result<RegistrationResponse, ApiError>;

    // ---- notifications ----

    async fn notifications(&self) -> Result<Vec<Notification>, ApiError>;

    async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError>;

    async fn mark_all_notifications_read(&self) -> Result<(), ApiError>;

    async fn delete_notification(&self, id: i64) -> Result<(), ApiError>;

    async fn delete_read_notifications(&self) -> Result<(), ApiError>;

    async fn unread_count(&self) -> Result<u64, ApiError>;

    // ---- reports (admin) ----

    async fn global_statistics(&self) -> Result<GlobalStatistics, ApiError>;

    async fn ranking(&self, limit: usize) -> Result<Vec<RankingEntry>, ApiError>;

    /// Generate and download a report; the body is raw CSV or PDF bytes.
    async fn export_report(
        &self,
        request: ReportRequest,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ApiError>;
}
