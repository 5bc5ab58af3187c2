//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the DUNAB client and the backend
//! REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user management DTOs
//!   - **[`dto::currency`]**: DUNAB accounts, transactions, and categories
//!   - **[`dto::events`]**: University events and registrations
//!   - **[`dto::academic`]**: Student profiles and academic progress
//!   - **[`dto::notifications`]**: User notifications
//!   - **[`dto::paging`]**: Page envelopes and the bare-array/envelope union
//!   - **[`dto::reports`]**: Admin reporting and export DTOs
//! - **[`utils`]**: Shared formatting and lenient timestamp parsing
//!
//! ## Wire Format
//!
//! The backend is a Spring service whose JSON field names are Spanish
//! camelCase (`cuentaId`, `monto`, `fechaCreacion`, ...). Rust field names
//! stay English; `#[serde(rename)]`/`alias` attributes carry the mapping, and
//! English aliases are accepted on input so fixtures and newer endpoints both
//! deserialize.
//!
//! Enumerated tags arrive in several synonymous spellings
//! (`INGRESO`/`CREDITO`/`credit`/...). They are normalized into typed enums
//! at this boundary — see [`dto::currency::TransactionKind`] — so no
//! string-synonym matching leaks into business logic.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
