//! # Core Types
//!
//! Error types and the service trait used for dependency injection.

pub mod error;
pub mod service;

pub use error::{ApiError, AppError};
pub use service::ApiService;
