//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the embedding UI shell, the async task
//! layer and the shared application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Shell thread (UI loop)                 │
//! │  ┌──────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                              │   │
//! │  │  - on_tick() - drains the event channel          │   │
//! │  │  - handle_*() - user action entry points         │   │
//! │  └────────────┬─────────────────────────────────────┘   │
//! │               │                                          │
//! │  ┌────────────▼─────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                    │   │
//! │  │  - locks held briefly, never across .await       │   │
//! │  └──────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────┐
//! │                Async tasks (Tokio runtime)              │
//! │  - login / register / logout                            │
//! │  - account, balance, history, totals fetches            │
//! │  - notification poller (interval + jitter)              │
//! │  - events and academic progress fetches                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers validate input synchronously and spawn tasks; tasks call the
//! backend through the [`crate::core::service::ApiService`] trait and send
//! [`AppEvent`]s back; [`App::on_tick`] applies those results to state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use client::app::App;
//!
//! let mut app = App::new();
//!
//! // In the shell's update loop:
//! loop {
//!     // Apply async results (non-blocking)
//!     app.on_tick();
//!
//!     // Dispatch user actions
//!     // app.handle_login(email.clone(), password.clone());
//!
//!     // Render from a short-lived read lock
//!     let state = app.state.read();
//!     // render(&state);
//!     drop(state);
//! }
//! ```

pub mod events;
pub mod state;

pub(crate) mod event_handler;
pub(crate) mod handlers;
pub(crate) mod tasks;

pub use events::AppEvent;
pub use state::{AppState, Language, Theme};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use shared::{CreateTransactionRequest, RegisterRequest};

use crate::services::{ApiClient, SessionStore};
use crate::utils::{SortKey, TransactionFilters};
use event_handler::AppEventHandler;

/// Central coordinator between the UI shell, async tasks and shared state.
///
/// Owns the state lock, the event channel and the session store. A shell
/// embeds one `App`, calls [`App::on_tick`] every frame and dispatches user
/// actions through the `handle_*` methods; everything else happens on the
/// Tokio runtime.
pub struct App {
    /// Thread-safe shared application state. Read for rendering, written by
    /// handlers and the event handler. Locks are held briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Receiver side of the event channel, polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    /// Sender side, cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    /// File-backed store for the session and UI preferences.
    storage: Arc<Mutex<SessionStore>>,
}

impl App {
    /// Create an application against the default API base URL and session
    /// store path, restoring any persisted session and preferences.
    pub fn new() -> Self {
        Self::with_store(SessionStore::open())
    }

    /// Create an application over an explicit session store. A persisted
    /// session is restored into state and its token attached to the API
    /// client; background fetches and the notification poller start
    /// immediately when a session was restored.
    pub fn with_store(store: SessionStore) -> Self {
        let api_client = Arc::new(ApiClient::new());

        let mut state = AppState::default();
        if let Some(theme) = store.theme() {
            state.settings.theme = Theme::from_str(&theme);
        }
        if let Some(language) = store.language() {
            state.settings.language = Language::from_str(&language);
        }
        if let Some(session) = store.load_session() {
            tracing::info!(user = %session.user.email, "Restored persisted session");
            api_client.set_token(&session.token);
            state.session.token = Some(session.token);
            state.session.refresh_token = session.refresh_token;
            state.session.user = Some(session.user);
        }
        state.api_client = Some(api_client);

        let (event_tx, event_rx) = unbounded();
        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            storage: Arc::new(Mutex::new(store)),
        };

        if app.state.read().session.is_authenticated() {
            app.start_session_tasks();
        }

        tracing::info!("App initialized, event channel created");
        app
    }

    /// Drain the event channel, applying every pending async result to
    /// state. Non-blocking; call once per frame from the shell.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply a single async result to state.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Kick off the per-session background work: initial fetches plus the
    /// notification poller. Called after login and after session restore.
    pub(crate) fn start_session_tasks(&self) {
        tasks::currency::fetch_account(self.state.clone(), self.event_tx.clone());
        tasks::notifications::fetch_notifications(self.state.clone(), self.event_tx.clone());
        tasks::notifications::fetch_unread_count(self.state.clone(), self.event_tx.clone());
        tasks::campus::fetch_events(self.state.clone(), self.event_tx.clone());
        tasks::campus::fetch_academic(self.state.clone(), self.event_tx.clone());
        tasks::notifications::spawn_notification_poller(self.state.clone(), self.event_tx.clone());
    }

    // ---- auth ----

    /// Submit the login form.
    pub fn handle_login(&mut self, email: String, password: String) {
        handlers::auth::handle_login(self.state.clone(), self.event_tx.clone(), email, password);
    }

    /// Submit the registration form.
    pub fn handle_register(&mut self, request: RegisterRequest, confirm_password: String) {
        handlers::auth::handle_register(
            self.state.clone(),
            self.event_tx.clone(),
            request,
            confirm_password,
        );
    }

    /// Sign out. Local state clears once [`AppEvent::LogoutCompleted`]
    /// arrives; the server-side invalidation is best effort.
    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone(), self.event_tx.clone());
    }

    // ---- currency ----

    /// Submit the new-transaction form.
    pub fn handle_create_transaction(&mut self, request: CreateTransactionRequest) {
        handlers::transactions::handle_create_transaction(
            self.state.clone(),
            self.event_tx.clone(),
            request,
        );
    }

    /// Record that a transaction detail view was opened.
    pub fn handle_view_transaction(&mut self, id: i64) {
        handlers::transactions::handle_view_transaction(self.state.clone(), id);
    }

    /// Replace the history filters and rebuild the paged view.
    pub fn handle_filter_change(&mut self, filters: TransactionFilters) {
        handlers::transactions::handle_filter_change(self.state.clone(), filters);
    }

    /// Toggle a history sort column.
    pub fn handle_sort_toggle(&mut self, key: SortKey) {
        handlers::transactions::handle_sort_toggle(self.state.clone(), key);
    }

    /// Jump to a history page (clamped to the valid range).
    pub fn handle_page_change(&mut self, page: usize) {
        handlers::transactions::handle_page_change(self.state.clone(), page);
    }

    /// Re-fetch the account balance.
    pub fn refresh_balance(&mut self) {
        tasks::currency::fetch_balance(self.state.clone(), self.event_tx.clone());
    }

    /// Re-fetch the transaction history.
    pub fn refresh_transactions(&mut self) {
        tasks::currency::fetch_transactions(self.state.clone(), self.event_tx.clone());
    }

    // ---- notifications ----

    /// Mark one notification as read (optimistic, synced in background).
    pub fn handle_mark_notification_read(&mut self, id: i64) {
        handlers::notifications::handle_mark_read(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Mark every notification as read.
    pub fn handle_mark_all_notifications_read(&mut self) {
        handlers::notifications::handle_mark_all_read(self.state.clone(), self.event_tx.clone());
    }

    /// Delete one notification.
    pub fn handle_delete_notification(&mut self, id: i64) {
        handlers::notifications::handle_delete(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Re-fetch the notification list outside the poller cadence.
    pub fn refresh_notifications(&mut self) {
        tasks::notifications::fetch_notifications(self.state.clone(), self.event_tx.clone());
        tasks::notifications::fetch_unread_count(self.state.clone(), self.event_tx.clone());
    }

    // ---- events & academic ----

    /// Re-fetch the campus event list.
    pub fn refresh_events(&mut self) {
        tasks::campus::fetch_events(self.state.clone(), self.event_tx.clone());
    }

    /// Register the signed-in user for an event.
    pub fn handle_register_for_event(&mut self, event_id: i64) {
        tasks::campus::register_for_event(self.state.clone(), self.event_tx.clone(), event_id);
    }

    /// Confirm attendance at an event the user registered for.
    pub fn handle_confirm_attendance(&mut self, event_id: i64) {
        tasks::campus::confirm_attendance(self.state.clone(), self.event_tx.clone(), event_id);
    }

    /// Re-fetch profile and academic progress.
    pub fn refresh_academic(&mut self) {
        tasks::campus::fetch_academic(self.state.clone(), self.event_tx.clone());
    }

    // ---- settings ----

    pub fn handle_theme_change(&mut self, theme: Theme) {
        handlers::settings::handle_theme_change(self.state.clone(), theme);
    }

    pub fn handle_language_change(&mut self, language: Language) {
        handlers::settings::handle_language_change(self.state.clone(), language);
    }

    /// Persist the current preferences to the session store.
    pub fn handle_settings_save(&mut self) {
        handlers::settings::handle_settings_save(self.state.clone(), &self.storage);
    }

    /// Restore default preferences (unsaved until the next save).
    pub fn handle_settings_reset(&mut self) {
        handlers::settings::handle_settings_reset(self.state.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
