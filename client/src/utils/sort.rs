//! Client-side transaction sorting.
//!
//! Sorting is stable, so records that compare equal (including records with
//! unparseable timestamps or NaN amounts) keep their relative order.

use std::cmp::Ordering;

use shared::utils::parse_timestamp;
use shared::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Description,
    Amount,
}

impl SortKey {
    /// Amounts read most naturally largest first; every other column
    /// starts ascending when newly selected.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Amount => SortDirection::Descending,
            SortKey::Date | SortKey::Description => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// The initial history view is newest first, even though re-selecting
    /// the date column later starts from ascending.
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Clicking the active column flips direction; a new column starts at
    /// its default direction.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = key.default_direction();
        }
    }
}

fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => {
            let a = parse_timestamp(&a.timestamp);
            let b = parse_timestamp(&b.timestamp);
            match (a, b) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => Ordering::Equal,
            }
        }
        SortKey::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
        SortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
    }
}

/// Stable in-place sort.
pub fn sort_transactions(transactions: &mut [Transaction], state: SortState) {
    transactions.sort_by(|a, b| {
        let ordering = compare(a, b, state.key);
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{TransactionKind, TransactionStatus};

    fn tx(id: i64, desc: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            id,
            account_id: 1,
            kind: TransactionKind::Credit,
            amount,
            category: "General".to_string(),
            description: desc.to_string(),
            reference: None,
            timestamp: date.to_string(),
            status: TransactionStatus::Completed,
            pushed_at: None,
        }
    }

    #[test]
    fn date_descending_by_default() {
        let mut txs = vec![
            tx(1, "a", 1.0, "2026-01-10T08:00:00"),
            tx(2, "b", 1.0, "2026-03-01T08:00:00"),
            tx(3, "c", 1.0, "2026-02-15T08:00:00"),
        ];
        sort_transactions(&mut txs, SortState::default());
        let ids: Vec<i64> = txs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn description_sort_ignores_case() {
        let mut txs = vec![
            tx(1, "zebra", 1.0, "2026-01-01T00:00:00"),
            tx(2, "Apple", 1.0, "2026-01-01T00:00:00"),
            tx(3, "mango", 1.0, "2026-01-01T00:00:00"),
        ];
        sort_transactions(
            &mut txs,
            SortState {
                key: SortKey::Description,
                direction: SortDirection::Ascending,
            },
        );
        let ids: Vec<i64> = txs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn amount_defaults_to_descending() {
        assert_eq!(
            SortKey::Amount.default_direction(),
            SortDirection::Descending
        );

        let mut txs = vec![
            tx(1, "a", 5.0, "2026-01-01T00:00:00"),
            tx(2, "b", 50.0, "2026-01-01T00:00:00"),
            tx(3, "c", 20.0, "2026-01-01T00:00:00"),
        ];
        let mut state = SortState::default();
        state.toggle(SortKey::Amount);
        sort_transactions(&mut txs, state);
        let ids: Vec<i64> = txs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn toggle_flips_direction_on_same_key() {
        let mut state = SortState::default();
        assert_eq!(state.direction, SortDirection::Descending);

        state.toggle(SortKey::Date);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortKey::Description);
        assert_eq!(state.key, SortKey::Description);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn new_key_starts_at_its_default_direction() {
        let mut state = SortState {
            key: SortKey::Description,
            direction: SortDirection::Ascending,
        };

        // Date as a freshly selected column starts ascending; only the
        // initial default view is descending.
        state.toggle(SortKey::Date);
        assert_eq!(state.key, SortKey::Date);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortKey::Amount);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn unparseable_dates_keep_relative_order() {
        let mut txs = vec![
            tx(1, "a", 1.0, "garbage"),
            tx(2, "b", 1.0, "2026-01-01T00:00:00"),
            tx(3, "c", 1.0, "also garbage"),
        ];
        sort_transactions(
            &mut txs,
            SortState {
                key: SortKey::Date,
                direction: SortDirection::Ascending,
            },
        );
        // The two unparseable entries stay in input order relative to
        // each other.
        let pos1 = txs.iter().position(|t| t.id == 1).unwrap();
        let pos3 = txs.iter().position(|t| t.id == 3).unwrap();
        assert!(pos1 < pos3);
    }

    #[test]
    fn nan_amounts_do_not_panic() {
        let mut txs = vec![
            tx(1, "a", f64::NAN, "2026-01-01T00:00:00"),
            tx(2, "b", 10.0, "2026-01-01T00:00:00"),
        ];
        sort_transactions(
            &mut txs,
            SortState {
                key: SortKey::Amount,
                direction: SortDirection::Descending,
            },
        );
        assert_eq!(txs.len(), 2);
    }
}
