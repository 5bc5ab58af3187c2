//! # Event Handler
//!
//! Applies [`AppEvent`] results from background tasks onto shared state.
//!
//! Policy lives here rather than in the tasks: a 401 from any endpoint
//! forces a logout, form-flow failures surface a message in the owning
//! sub-state, and background-refresh failures are logged and swallowed so
//! previous state stays in place.

use shared::{Notification, NotificationKind, TransactionKind};

use crate::app::events::AppEvent;
use crate::app::App;
use crate::core::error::ApiError;
use crate::services::storage::StoredSession;

/// Trait for the event handling implementation.
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Write locks are taken per event and released before anything else
    /// runs, so a burst of events never starves readers.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_auth_result(result, "Login"),
            AppEvent::RegisterResult(result) => self.handle_auth_result(result, "Registration"),
            AppEvent::LogoutCompleted => self.handle_logout_completed(),
            AppEvent::AccountResult(result) => self.handle_account_result(result),
            AppEvent::BalanceResult(result) => self.handle_balance_result(result),
            AppEvent::TransactionsResult(result) => self.handle_transactions_result(result),
            AppEvent::TransactionCreated(result) => self.handle_transaction_created(result),
            AppEvent::TotalsResult(result) => self.handle_totals_result(result),
            AppEvent::NotificationsResult(result) => self.handle_notifications_result(result),
            AppEvent::UnreadCountResult(result) => self.handle_unread_count_result(result),
            AppEvent::NotificationMarkedRead(id, result) => {
                self.handle_notification_sync(result, "mark read", id)
            }
            AppEvent::AllNotificationsMarkedRead(result) => {
                self.handle_notification_sync(result, "mark all read", 0)
            }
            AppEvent::NotificationDeleted(id, result) => {
                self.handle_notification_sync(result, "delete", id)
            }
            AppEvent::EventsResult(result) => self.handle_events_result(result),
            AppEvent::EventRegistered(id, result) => self.handle_event_registered(id, result),
            AppEvent::ProfileResult(result) => self.handle_profile_result(result),
            AppEvent::ProgressResult(result) => self.handle_progress_result(result),
            AppEvent::Loading(message) => {
                self.state.write().loading = Some(message);
            }
        }
    }
}

impl App {
    /// Force a logout when the backend says the session is gone. Returns
    /// whether the error was consumed that way.
    fn logout_if_unauthorized(&mut self, error: &ApiError) -> bool {
        if !error.is_unauthorized() {
            return false;
        }
        tracing::warn!("Session rejected by backend (401), forcing logout");
        self.handle_logout_completed();
        true
    }

    fn handle_auth_result(
        &mut self,
        result: Result<shared::AuthResponse, ApiError>,
        flow: &str,
    ) {
        match result {
            Ok(response) => {
                tracing::info!(user = %response.user.email, "{} succeeded", flow);

                if let Some(api_client) = self.state.read().api_client.clone() {
                    api_client.set_token(&response.token);
                }
                let stored = StoredSession {
                    token: response.token.clone(),
                    refresh_token: response.refresh_token.clone(),
                    user: response.user.clone(),
                };
                if let Err(e) = self.storage.lock().save_session(&stored) {
                    tracing::error!("Failed to persist session: {}", e);
                }

                {
                    let mut state = self.state.write();
                    state.session.token = Some(response.token);
                    state.session.refresh_token = response.refresh_token;
                    state.session.user = Some(response.user);
                    state.session.error = None;
                    state.loading = None;
                }

                self.start_session_tasks();
            }
            Err(error) => {
                tracing::warn!(error = %error, "{} failed", flow);
                let mut state = self.state.write();
                state.session.error = Some(error.message);
                state.loading = None;
            }
        }
    }

    /// Tear the session down: drop the bearer token, forget the persisted
    /// session and reset every per-session sub-state. Preferences survive.
    fn handle_logout_completed(&mut self) {
        if let Err(e) = self.storage.lock().clear_session() {
            tracing::error!("Failed to clear persisted session: {}", e);
        }

        let mut state = self.state.write();
        if let Some(api_client) = state.api_client.as_ref() {
            api_client.clear_token();
        }
        state.session.clear();
        state.currency = Default::default();
        state.notifications = Default::default();
        state.events = Default::default();
        state.academic = Default::default();
        state.loading = None;
        tracing::info!("Signed out, session state cleared");
    }

    fn handle_account_result(&mut self, result: Result<shared::Account, ApiError>) {
        match result {
            Ok(account) => {
                {
                    let mut state = self.state.write();
                    state.currency.balance = account.balance;
                    state.currency.account = Some(account);
                }
                // History and totals only make sense once the account is known.
                self.refresh_transactions();
                super::tasks::currency::fetch_totals(self.state.clone(), self.event_tx.clone());
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, "Account lookup failed");
                    self.state.write().currency.error = Some(error.message);
                }
            }
        }
    }

    fn handle_balance_result(&mut self, result: Result<shared::BalanceResponse, ApiError>) {
        match result {
            Ok(balance) => {
                self.state.write().currency.balance = balance.balance;
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, "Balance refresh failed, keeping previous value");
                }
            }
        }
    }

    fn handle_transactions_result(&mut self, result: Result<Vec<shared::Transaction>, ApiError>) {
        match result {
            Ok(transactions) => {
                let mut state = self.state.write();
                tracing::debug!(count = transactions.len(), "Transaction history updated");
                state.currency.transactions = transactions;
                state.currency.error = None;
                state.currency.apply_filters();
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, "History fetch failed, keeping previous list");
                }
            }
        }
    }

    fn handle_transaction_created(&mut self, result: Result<shared::Transaction, ApiError>) {
        match result {
            Ok(transaction) => {
                tracing::info!(id = transaction.id, "Transaction accepted by backend");
                {
                    let mut state = self.state.write();
                    let kind = match transaction.kind {
                        TransactionKind::Credit => NotificationKind::CurrencyCredit,
                        TransactionKind::Debit => NotificationKind::CurrencyDebit,
                    };
                    let message = match transaction.kind {
                        TransactionKind::Credit => {
                            format!("Received {:.2} DUNAB: {}", transaction.amount, transaction.description)
                        }
                        TransactionKind::Debit => {
                            format!("Spent {:.2} DUNAB: {}", transaction.amount, transaction.description)
                        }
                    };
                    state
                        .notifications
                        .queue
                        .enqueue(Notification::new(kind, message));
                    state.currency.transactions.insert(0, transaction);
                    state.currency.error = None;
                    state.loading = None;
                    state.currency.apply_filters();
                }
                self.refresh_balance();
                super::tasks::currency::fetch_totals(self.state.clone(), self.event_tx.clone());
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    let mut state = self.state.write();
                    state.currency.error = Some(error.message);
                    state.loading = None;
                }
            }
        }
    }

    fn handle_totals_result(&mut self, result: Result<shared::TransactionTotals, ApiError>) {
        match result {
            Ok(totals) => {
                self.state.write().currency.totals = Some(totals);
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, "Totals fetch failed");
                }
            }
        }
    }

    fn handle_notifications_result(&mut self, result: Result<Vec<shared::Notification>, ApiError>) {
        match result {
            Ok(notifications) => {
                let mut state = self.state.write();
                tracing::debug!(count = notifications.len(), "Notification list refreshed");
                state.notifications.queue.replace_all(notifications);
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    // Poller failures are routine (sleeping laptop, flaky
                    // campus wifi); the next pass will retry anyway.
                    tracing::debug!(error = %error, "Notification refresh failed");
                }
            }
        }
    }

    fn handle_unread_count_result(&mut self, result: Result<u64, ApiError>) {
        match result {
            Ok(count) => {
                self.state.write().notifications.unread_count = count;
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::debug!(error = %error, "Unread count refresh failed");
                }
            }
        }
    }

    /// Read/delete syncs are optimistic: local state already changed, so a
    /// failure only gets logged and the next poll reconciles.
    fn handle_notification_sync(&mut self, result: Result<(), ApiError>, action: &str, id: i64) {
        if let Err(error) = result {
            if !self.logout_if_unauthorized(&error) {
                tracing::warn!(error = %error, id, "Notification {} did not sync", action);
            }
        }
    }

    fn handle_events_result(&mut self, result: Result<Vec<shared::Event>, ApiError>) {
        match result {
            Ok(events) => {
                let mut state = self.state.write();
                state.events.events = events;
                state.events.error = None;
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, "Event list fetch failed");
                    self.state.write().events.error = Some(error.message);
                }
            }
        }
    }

    fn handle_event_registered(
        &mut self,
        event_id: i64,
        result: Result<shared::RegistrationResponse, ApiError>,
    ) {
        match result {
            Ok(registration) => {
                let mut state = self.state.write();
                let name = state
                    .events
                    .events
                    .iter_mut()
                    .find(|e| e.id == event_id)
                    .map(|event| {
                        event.registration_status = Some(registration.status);
                        event.name.clone()
                    });
                if let Some(name) = name {
                    state.notifications.queue.enqueue(Notification::new(
                        NotificationKind::EventRegistered,
                        format!("Registered for {}", name),
                    ));
                }
                state.events.error = None;
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, event_id, "Event registration failed");
                    self.state.write().events.error = Some(error.message);
                }
            }
        }
    }

    fn handle_profile_result(&mut self, result: Result<shared::StudentProfile, ApiError>) {
        match result {
            Ok(profile) => {
                self.state.write().academic.profile = Some(profile);
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, "Profile fetch failed");
                }
            }
        }
    }

    fn handle_progress_result(&mut self, result: Result<shared::AcademicProgress, ApiError>) {
        match result {
            Ok(progress) => {
                self.state.write().academic.progress = Some(progress);
            }
            Err(error) => {
                if !self.logout_if_unauthorized(&error) {
                    tracing::warn!(error = %error, "Academic progress fetch failed");
                }
            }
        }
    }
}
