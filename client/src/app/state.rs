//! # Application State Types
//!
//! All state-related types for the application, split into sub-states per
//! feature area: session, currency, notifications, events, academic
//! progress and settings.

use std::sync::Arc;

use shared::{
    AcademicProgress, Account, Event, StudentProfile, Transaction, TransactionTotals, UserInfo,
};

use crate::collections::{NotificationQueue, TransactionStack};
use crate::services::ApiClient;
use crate::utils::{sort_transactions, Paginator, SortState, TransactionFilters};

/// UI color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unrecognized values fall back to the default.
    pub fn from_str(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "en" => Language::English,
            _ => Language::Spanish,
        }
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserInfo>,
    /// Last auth error, shown on the login form.
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// DUNAB currency sub-state: account, balance, transaction history and the
/// local filter/sort/paginate pipeline over it.
#[derive(Debug, Clone)]
pub struct CurrencyState {
    pub account: Option<Account>,
    pub balance: f64,
    /// Full history as last fetched, unfiltered and unsorted.
    pub transactions: Vec<Transaction>,
    pub filters: TransactionFilters,
    pub sort: SortState,
    /// Pages over the filtered and sorted view of `transactions`.
    pub pager: Paginator<Transaction>,
    /// Recently viewed transactions, newest on top.
    pub recent: TransactionStack,
    pub totals: Option<TransactionTotals>,
    pub fetching: bool,
    pub error: Option<String>,
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self {
            account: None,
            balance: 0.0,
            transactions: Vec::new(),
            filters: TransactionFilters::default(),
            sort: SortState::default(),
            pager: Paginator::default(),
            recent: TransactionStack::new(),
            totals: None,
            fetching: false,
            error: None,
        }
    }
}

impl CurrencyState {
    /// Rebuild the paged view from the raw history. Called after the
    /// history, filters or sort change; jumps back to the first page.
    pub fn apply_filters(&mut self) {
        let mut view: Vec<Transaction> = self
            .filters
            .apply(&self.transactions)
            .into_iter()
            .cloned()
            .collect();
        sort_transactions(&mut view, self.sort);
        self.pager.set_items(view);
    }
}

/// Notification sub-state
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    pub queue: NotificationQueue,
    /// Server-side unread count, which may exceed what the bounded queue
    /// holds locally.
    pub unread_count: u64,
    pub fetching: bool,
}

/// Campus events sub-state
#[derive(Debug, Clone, Default)]
pub struct EventsState {
    pub events: Vec<Event>,
    pub fetching: bool,
    pub error: Option<String>,
}

/// Academic progress sub-state
#[derive(Debug, Clone, Default)]
pub struct AcademicState {
    pub profile: Option<StudentProfile>,
    pub progress: Option<AcademicProgress>,
    pub fetching: bool,
}

/// Settings sub-state
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub theme: Theme,
    pub language: Language,
    pub unsaved_changes: bool,
}

/// Top-level application state shared across threads.
#[derive(Default)]
pub struct AppState {
    pub api_client: Option<Arc<ApiClient>>,
    pub session: SessionState,
    pub currency: CurrencyState,
    pub notifications: NotificationState,
    pub events: EventsState,
    pub academic: AcademicState,
    pub settings: SettingsState,
    /// Human-readable message while a foreground operation runs.
    pub loading: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{TransactionKind, TransactionStatus};

    fn tx(id: i64, kind: TransactionKind, amount: f64, desc: &str) -> Transaction {
        Transaction {
            id,
            account_id: 1,
            kind,
            amount,
            category: "General".to_string(),
            description: desc.to_string(),
            reference: None,
            timestamp: format!("2026-01-{:02}T10:00:00", id),
            status: TransactionStatus::Completed,
            pushed_at: None,
        }
    }

    #[test]
    fn theme_and_language_round_trip() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str("unknown"), Theme::Light);
        assert_eq!(Language::from_str(Language::English.as_str()), Language::English);
        assert_eq!(Language::from_str("unknown"), Language::Spanish);
    }

    #[test]
    fn session_authentication_needs_token_and_user() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());

        session.token = Some("t".to_string());
        assert!(!session.is_authenticated());

        session.user = Some(UserInfo {
            id: 1,
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            email: "ana@unab.edu.co".to_string(),
            role: Default::default(),
            student_code: None,
        });
        assert!(session.is_authenticated());

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn apply_filters_feeds_filtered_sorted_view_into_pager() {
        let mut currency = CurrencyState::default();
        currency.transactions = vec![
            tx(1, TransactionKind::Credit, 10.0, "reward"),
            tx(2, TransactionKind::Debit, 5.0, "lunch"),
            tx(3, TransactionKind::Credit, 20.0, "reward"),
        ];
        currency.filters.kind = Some(TransactionKind::Credit);

        currency.apply_filters();

        // Date descending by default, so id 3 comes first
        let page = currency.pager.current_page_items();
        let ids: Vec<i64> = page.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(currency.pager.current_page(), 1);
    }
}
