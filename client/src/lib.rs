//! # DUNAB Client - Library Root
//!
//! Everything-but-rendering core of the DUNAB university virtual-currency
//! client: HTTP service wrappers, application state, bounded collections,
//! and the client-side filter/sort/paginate pipeline. A UI shell embeds
//! [`app::App`] and drives it; no rendering code lives here.
//!
//! ## Module Structure
//!
//! - **app**: Application state and orchestration
//!   - `state`: the [`app::state::AppState`] container and its sub-states
//!   - `handlers`: user-action entry points (validate, spawn, update state)
//!   - `tasks`: background fetches and the notification poller
//!   - `event_handler`: applies async results back onto state
//!
//! - **services**: External integrations
//!   - `api`: backend HTTP client (auth, currency, events, notifications,
//!     students, reports)
//!   - `storage`: JSON file store for session and preferences
//!
//! - **collections**: Bounded ordered collections
//!   - `NotificationQueue`: size-capped FIFO with read/unread tracking
//!   - `TransactionStack`: size-capped LIFO with financial aggregates
//!
//! - **utils**: Pagination, filtering, sorting, input validation
//!
//! ## Core Concepts
//!
//! State lives in `Arc<RwLock<AppState>>`. Handlers take the state and an
//! event channel, validate input, and spawn Tokio tasks that call the
//! backend through the [`core::service::ApiService`] trait; results come
//! back as [`app::events::AppEvent`] values which the event handler applies
//! to state. Locks are held briefly and never across `.await` points.
//!
//! Form-style failures (login, create transaction) surface an error message
//! in the owning sub-state. Background refresh failures are logged and
//! swallowed; previous state stays in place. A 401 from any endpoint forces
//! a logout and clears the persisted session.

pub mod app;
pub mod collections;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;
