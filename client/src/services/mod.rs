//! # Services
//!
//! External integrations: the backend HTTP API and the local JSON store for
//! session and preferences.

pub mod api;
pub mod storage;

pub use api::ApiClient;
pub use storage::SessionStore;
