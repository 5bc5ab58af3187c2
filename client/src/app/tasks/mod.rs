//! # Background Tasks
//!
//! Async fetch tasks spawned onto the Tokio runtime. Each task grabs the
//! API client with a short lock, performs the request without holding any
//! lock, and delivers the outcome through the event channel.

pub(crate) mod campus;
pub(crate) mod currency;
pub(crate) mod notifications;
