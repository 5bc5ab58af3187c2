//! # Action Handlers
//!
//! Synchronous entry points for user actions. Each handler validates input
//! against current state, spawns an async task when the backend is needed,
//! and records any immediate state change. Results come back as
//! [`crate::app::AppEvent`]s.

pub(crate) mod auth;
pub(crate) mod notifications;
pub(crate) mod settings;
pub(crate) mod transactions;
