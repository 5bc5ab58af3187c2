//! # Application Events
//!
//! Event types for async task communication between background tasks and
//! the owner of the [`crate::app::App`].

use shared::{
    AcademicProgress, Account, AuthResponse, BalanceResponse, Event, Notification,
    RegistrationResponse, StudentProfile, Transaction, TransactionTotals,
};

use crate::core::error::ApiError;

/// Async task results delivered back through the event channel.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<AuthResponse, ApiError>),
    /// Registration completed
    RegisterResult(Result<AuthResponse, ApiError>),
    /// Server-side logout finished (errors are ignored, logout is local)
    LogoutCompleted,
    /// Account lookup finished
    AccountResult(Result<Account, ApiError>),
    /// Balance refresh finished
    BalanceResult(Result<BalanceResponse, ApiError>),
    /// Transaction history fetched
    TransactionsResult(Result<Vec<Transaction>, ApiError>),
    /// New transaction accepted or rejected by the backend
    TransactionCreated(Result<Transaction, ApiError>),
    /// Aggregate totals fetched
    TotalsResult(Result<TransactionTotals, ApiError>),
    /// Notification list fetched (poller or manual refresh)
    NotificationsResult(Result<Vec<Notification>, ApiError>),
    /// Server-side unread counter fetched
    UnreadCountResult(Result<u64, ApiError>),
    /// A notification was marked read server-side
    NotificationMarkedRead(i64, Result<(), ApiError>),
    /// Every notification was marked read server-side
    AllNotificationsMarkedRead(Result<(), ApiError>),
    /// A notification was deleted server-side
    NotificationDeleted(i64, Result<(), ApiError>),
    /// Event list fetched
    EventsResult(Result<Vec<Event>, ApiError>),
    /// Event registration finished
    EventRegistered(i64, Result<RegistrationResponse, ApiError>),
    /// Student profile fetched
    ProfileResult(Result<StudentProfile, ApiError>),
    /// Academic progress fetched
    ProgressResult(Result<AcademicProgress, ApiError>),
    /// Foreground operation in flight
    Loading(String),
}
