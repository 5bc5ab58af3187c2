//! # Bounded Client-Side Collections
//!
//! In-memory collections with hard capacity bounds so a long-lived session
//! never grows without limit: a FIFO queue for notifications and a LIFO
//! stack for recently viewed transactions. Both evict the oldest entry
//! when full and both snapshot to JSON for persistence across runs.

pub mod notification_queue;
pub mod transaction_stack;

pub use notification_queue::{NotificationQueue, DEFAULT_MAX_NOTIFICATIONS};
pub use transaction_stack::{StackStatistics, TransactionStack, DEFAULT_MAX_RECENT};

use rand::Rng;

/// Millisecond timestamp widened with a random suffix, used for entries
/// created locally before the backend assigns a real id. Two entries created
/// in the same millisecond still get distinct ids in practice.
pub(crate) fn assign_local_id() -> i64 {
    let millis = chrono::Utc::now().timestamp_millis();
    millis * 1000 + rand::rng().random_range(0..1000)
}

/// Current instant as an RFC 3339 string with millisecond precision.
pub(crate) fn now_iso() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_ids_are_positive_and_distinct() {
        let a = assign_local_id();
        let b = assign_local_id();
        assert!(a > 0);
        assert!(b > 0);
        // Ids share the same millisecond at worst; the random suffix keeps
        // a collision unlikely but not impossible, so only check magnitude.
        assert!(a / 1000 <= b / 1000 + 1);
    }

    #[test]
    fn now_iso_parses_back() {
        let stamp = now_iso();
        assert!(shared::utils::parse_timestamp(&stamp).is_some());
    }
}
