//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, token refresh and verification
//! - [`currency`] - DUNAB accounts, transactions, categories, statistics
//! - [`events`] - University events and event registrations
//! - [`academic`] - Student profiles and academic progress
//! - [`notifications`] - User notifications
//! - [`paging`] - Page envelope plus the bare-array/envelope union type
//! - [`reports`] - Admin reports, rankings and exports
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: Rust fields are English snake_case, renamed to the
//!   backend's Spanish camelCase on the wire with English aliases on input
//! - **Optional fields**: omitted when `None` via
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enumerated tags**: normalized into typed enums with lenient,
//!   case-insensitive readers (see [`currency::TransactionKind`])

pub mod academic;
pub mod auth;
pub mod currency;
pub mod events;
pub mod notifications;
pub mod paging;
pub mod reports;

pub use academic::*;
pub use auth::*;
pub use currency::*;
pub use events::*;
pub use notifications::*;
pub use paging::*;
pub use reports::*;
