//! # Shared Utility Functions
//!
//! Formatting helpers and lenient timestamp parsing used across the client.
//!
//! ## Amount Formatting
//!
//! - [`format_amount`] - thousands separators and fixed decimals
//! - [`format_signed_amount`] - signed DUNAB rendering derived from the
//!   transaction kind (the sign is never stored on the record itself)
//!
//! ## Timestamps
//!
//! The backend emits `LocalDateTime` values without an offset while locally
//! synthesized records carry RFC 3339 strings. [`parse_timestamp`] accepts
//! both plus a date-only fallback and returns `None` for anything else, so
//! malformed data degrades to "no timestamp" instead of an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::dto::currency::TransactionKind;

/// Format an amount with comma thousands separators and fixed decimals.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_amount(100.0, 2), "100.00");
/// assert_eq!(format_amount(-2500.5, 2), "-2,500.50");
/// ```
pub fn format_amount(value: f64, decimals: usize) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let mut parts = formatted.splitn(2, '.');

    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next().unwrap_or("");

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    let body = if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Render a transaction amount with its sign derived from the kind.
///
/// Amounts are stored as unsigned magnitudes; credits render with a leading
/// `+`, debits with a leading `-`.
///
/// ```rust
/// use shared::dto::currency::TransactionKind;
/// use shared::utils::format_signed_amount;
///
/// assert_eq!(format_signed_amount(50.0, TransactionKind::Credit), "+50.00 DUNAB");
/// assert_eq!(format_signed_amount(12.5, TransactionKind::Debit), "-12.50 DUNAB");
/// ```
pub fn format_signed_amount(amount: f64, kind: TransactionKind) -> String {
    let sign = match kind {
        TransactionKind::Credit => '+',
        TransactionKind::Debit => '-',
    };
    format!("{}{} DUNAB", sign, format_amount(amount.abs(), 2))
}

/// Parse a backend or locally synthesized timestamp, leniently.
///
/// Accepted shapes, in order: RFC 3339, `LocalDateTime` with or without
/// fractional seconds (`2024-03-01T10:30:00`), and a bare date (taken as
/// midnight). Anything else yields `None`; callers decide what "no
/// timestamp" means for them (date filters exclude such records, sorting
/// leaves them where they were).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}
