//! # Utility Functions
//!
//! Pure helpers used across the client application.
//!
//! ## Modules
//!
//! - **[`filter`]**: Conjunctive transaction filtering
//! - **[`pagination`]**: 1-indexed client-side pagination
//! - **[`sort`]**: Stable transaction sorting with toggleable direction
//! - **[`validation`]**: Input validation utilities (emails, amounts, etc.)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (amount formatting, timestamps)
//! - [`crate::core`]: Core abstractions and error types

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod validation;

pub use filter::TransactionFilters;
pub use pagination::Paginator;
pub use sort::{sort_transactions, SortDirection, SortKey, SortState};
