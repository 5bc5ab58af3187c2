//! Client-side transaction filtering.
//!
//! All criteria are optional and combine conjunctively. A record whose
//! timestamp cannot be parsed fails any active date criterion rather than
//! slipping through.

use chrono::NaiveDate;
use shared::utils::parse_timestamp;
use shared::{Transaction, TransactionKind, TransactionStatus};

#[derive(Debug, Clone, Default)]
pub struct TransactionFilters {
    /// Case-insensitive substring match over description, category,
    /// stringified id and reference.
    pub search: String,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub status: Option<TransactionStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilters {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.kind.is_some()
            || self.category.is_some()
            || self.status.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let haystack_hit = transaction.description.to_lowercase().contains(&search)
                || transaction.category.to_lowercase().contains(&search)
                || transaction.id.to_string().contains(&search)
                || transaction
                    .reference
                    .as_deref()
                    .is_some_and(|r| r.to_lowercase().contains(&search));
            if !haystack_hit {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !transaction.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if transaction.status != status {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(when) = parse_timestamp(&transaction.timestamp) else {
                return false;
            };
            let date = when.date_naive();

            if let Some(from) = self.date_from {
                if date < from {
                    return false;
                }
            }
            // date_to is inclusive of the whole day
            if let Some(to) = self.date_to {
                if date > to {
                    return false;
                }
            }
        }

        true
    }

    /// Filter a list, preserving the input order.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, kind: TransactionKind, desc: &str, category: &str, date: &str) -> Transaction {
        Transaction {
            id,
            account_id: 1,
            kind,
            amount: 10.0,
            category: category.to_string(),
            description: desc.to_string(),
            reference: Some(format!("REF-{}", id)),
            timestamp: format!("{}T12:30:00", date),
            status: TransactionStatus::Completed,
            pushed_at: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, TransactionKind::Credit, "Event reward", "Eventos", "2026-01-10"),
            tx(2, TransactionKind::Debit, "Cafeteria lunch", "Cafeteria", "2026-01-15"),
            tx(3, TransactionKind::Debit, "Store purchase", "Tienda", "2026-02-01"),
        ]
    }

    #[test]
    fn default_filters_match_everything() {
        let filters = TransactionFilters::default();
        assert!(!filters.is_active());
        assert_eq!(filters.apply(&sample()).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut filters = TransactionFilters::default();
        filters.search = "CAFETERIA".to_string();
        // Matches both description and category of tx 2
        assert_eq!(filters.apply(&sample()).len(), 1);

        filters.search = "ref-3".to_string();
        let txs = sample();
        let hits = filters.apply(&txs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn search_matches_the_stringified_id() {
        let mut filters = TransactionFilters::default();
        filters.search = "2".to_string();
        let txs = sample();
        let hits = filters.apply(&txs);
        assert!(hits.iter().any(|t| t.id == 2));
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let mut filters = TransactionFilters::default();
        filters.kind = Some(TransactionKind::Debit);
        assert_eq!(filters.apply(&sample()).len(), 2);

        filters.category = Some("tienda".to_string());
        let txs = sample();
        let hits = filters.apply(&txs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);

        filters.search = "nothing matches this".to_string();
        assert!(filters.apply(&sample()).is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let mut filters = TransactionFilters::default();
        filters.date_from = NaiveDate::from_ymd_opt(2026, 1, 15);
        filters.date_to = NaiveDate::from_ymd_opt(2026, 2, 1);

        let txs = sample();
        let hits = filters.apply(&txs);
        let ids: Vec<i64> = hits.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn unparseable_timestamp_fails_date_criteria() {
        let mut bad = tx(9, TransactionKind::Credit, "odd", "General", "2026-01-01");
        bad.timestamp = "not a date".to_string();

        let mut filters = TransactionFilters::default();
        assert!(filters.matches(&bad));

        filters.date_from = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert!(!filters.matches(&bad));
    }

    #[test]
    fn status_filter() {
        let mut cancelled = tx(4, TransactionKind::Debit, "oops", "General", "2026-01-20");
        cancelled.status = TransactionStatus::Cancelled;
        let mut all = sample();
        all.push(cancelled);

        let mut filters = TransactionFilters::default();
        filters.status = Some(TransactionStatus::Cancelled);
        let hits = filters.apply(&all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
    }

    #[test]
    fn clear_resets_all_criteria() {
        let mut filters = TransactionFilters {
            search: "x".to_string(),
            kind: Some(TransactionKind::Credit),
            ..Default::default()
        };
        assert!(filters.is_active());
        filters.clear();
        assert!(!filters.is_active());
    }
}
