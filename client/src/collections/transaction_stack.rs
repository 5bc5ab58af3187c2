//! # Recent Transaction Stack
//!
//! Bounded LIFO stack over a `VecDeque` (front is the top). Pushing when
//! full evicts the bottom entry, so the stack always holds the most recent
//! `max_size` transactions with the newest on top.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use shared::{Transaction, TransactionKind};

use super::{assign_local_id, now_iso};

/// Capacity used by `TransactionStack::new`.
pub const DEFAULT_MAX_RECENT: usize = 10;

#[derive(Debug, Clone)]
pub struct TransactionStack {
    items: VecDeque<Transaction>,
    max_size: usize,
}

/// Aggregates over the stack contents. All zeros when the stack is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StackStatistics {
    pub total_credit: f64,
    pub total_debit: f64,
    pub credit_count: usize,
    pub debit_count: usize,
    pub average_credit: f64,
    pub average_debit: f64,
}

/// Serialized form of the stack, top first.
#[derive(Debug, Serialize, Deserialize)]
struct StackSnapshot {
    #[serde(rename = "maxSize")]
    max_size: usize,
    size: usize,
    items: Vec<Transaction>,
}

impl Default for TransactionStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStack {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_RECENT)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            items: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Push a transaction on top, evicting the bottom entry when full.
    ///
    /// Locally created records (id 0 or empty timestamp) get a local id and
    /// the current instant filled in. Every push stamps `pushed_at`.
    pub fn push(&mut self, mut transaction: Transaction) {
        if transaction.id == 0 {
            transaction.id = assign_local_id();
        }
        if transaction.timestamp.is_empty() {
            transaction.timestamp = now_iso();
        }
        transaction.pushed_at = Some(now_iso());

        if self.items.len() >= self.max_size {
            if let Some(evicted) = self.items.pop_back() {
                tracing::debug!(id = evicted.id, "Recent stack full, dropped oldest");
            }
        }
        self.items.push_front(transaction);
    }

    /// Remove and return the most recent transaction.
    pub fn pop(&mut self) -> Option<Transaction> {
        self.items.pop_front()
    }

    /// The most recent transaction without removing it.
    pub fn peek(&self) -> Option<&Transaction> {
        self.items.front()
    }

    /// The `n` most recent transactions, newest first.
    pub fn recent(&self, n: usize) -> Vec<&Transaction> {
        self.items.iter().take(n).collect()
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn filter_by_kind(&self, kind: TransactionKind) -> Vec<&Transaction> {
        self.items.iter().filter(|t| t.kind == kind).collect()
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Transaction> {
        self.items
            .iter()
            .filter(|t| t.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Signed sum over the stack: credits add, everything else subtracts.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, t| match t.kind {
            TransactionKind::Credit => acc + t.amount,
            TransactionKind::Debit => acc - t.amount,
        })
    }

    pub fn statistics(&self) -> StackStatistics {
        let mut stats = StackStatistics::default();
        for t in &self.items {
            match t.kind {
                TransactionKind::Credit => {
                    stats.total_credit += t.amount;
                    stats.credit_count += 1;
                }
                TransactionKind::Debit => {
                    stats.total_debit += t.amount;
                    stats.debit_count += 1;
                }
            }
        }
        if stats.credit_count > 0 {
            stats.average_credit = stats.total_credit / stats.credit_count as f64;
        }
        if stats.debit_count > 0 {
            stats.average_debit = stats.total_debit / stats.debit_count as f64;
        }
        stats
    }

    /// Remove one entry by id regardless of its position.
    pub fn remove_by_id(&mut self, id: i64) -> bool {
        match self.items.iter().position(|t| t.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn remaining_capacity(&self) -> usize {
        self.max_size - self.items.len()
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.items.iter()
    }

    /// Snapshot the stack as JSON, top first.
    pub fn to_json(&self) -> String {
        let snapshot = StackSnapshot {
            max_size: self.max_size,
            size: self.items.len(),
            items: self.items.iter().cloned().collect(),
        };
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Restore from a JSON snapshot. Malformed input leaves the stack
    /// unchanged.
    pub fn load_json(&mut self, json: &str) {
        match serde_json::from_str::<StackSnapshot>(json) {
            Ok(snapshot) => {
                self.max_size = snapshot.max_size.max(1);
                self.items.clear();
                self.items
                    .extend(snapshot.items.into_iter().take(self.max_size));
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed recent stack snapshot: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionStatus;

    fn tx(id: i64, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id,
            account_id: 1,
            kind,
            amount,
            category: "General".to_string(),
            description: format!("tx {}", id),
            reference: None,
            timestamp: format!("2026-01-{:02}T09:00:00", (id % 28) + 1),
            status: TransactionStatus::Completed,
            pushed_at: None,
        }
    }

    #[test]
    fn lifo_order() {
        let mut stack = TransactionStack::new();
        for i in 1..=4 {
            stack.push(tx(i, TransactionKind::Credit, 10.0));
        }

        assert_eq!(stack.peek().unwrap().id, 4);
        for expected in (1..=4).rev() {
            assert_eq!(stack.pop().unwrap().id, expected);
        }
        assert!(stack.pop().is_none());
    }

    #[test]
    fn full_stack_drops_bottom() {
        let mut stack = TransactionStack::with_capacity(3);
        assert_eq!(stack.remaining_capacity(), 3);
        for i in 1..=4 {
            stack.push(tx(i, TransactionKind::Debit, 5.0));
        }

        assert_eq!(stack.len(), 3);
        assert!(stack.is_full());
        assert_eq!(stack.remaining_capacity(), 0);
        let ids: Vec<i64> = stack.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);

        stack.pop();
        assert_eq!(stack.remaining_capacity(), 1);
    }

    #[test]
    fn push_stamps_pushed_at_and_fills_locals() {
        let mut stack = TransactionStack::new();
        let mut t = tx(0, TransactionKind::Credit, 25.0);
        t.timestamp.clear();
        stack.push(t);

        let stored = stack.peek().unwrap();
        assert!(stored.id > 0);
        assert!(stored.pushed_at.is_some());
        assert!(shared::utils::parse_timestamp(&stored.timestamp).is_some());
    }

    #[test]
    fn total_amount_is_signed() {
        let mut stack = TransactionStack::new();
        stack.push(tx(1, TransactionKind::Credit, 100.0));
        stack.push(tx(2, TransactionKind::Debit, 30.0));
        stack.push(tx(3, TransactionKind::Credit, 5.5));

        assert!((stack.total_amount() - 75.5).abs() < f64::EPSILON);
    }

    #[test]
    fn statistics_on_empty_stack_are_zero() {
        let stack = TransactionStack::new();
        assert_eq!(stack.statistics(), StackStatistics::default());
    }

    #[test]
    fn statistics_split_by_kind() {
        let mut stack = TransactionStack::new();
        stack.push(tx(1, TransactionKind::Credit, 100.0));
        stack.push(tx(2, TransactionKind::Credit, 50.0));
        stack.push(tx(3, TransactionKind::Debit, 40.0));

        let stats = stack.statistics();
        assert_eq!(stats.credit_count, 2);
        assert_eq!(stats.debit_count, 1);
        assert!((stats.total_credit - 150.0).abs() < f64::EPSILON);
        assert!((stats.average_credit - 75.0).abs() < f64::EPSILON);
        assert!((stats.total_debit - 40.0).abs() < f64::EPSILON);
        assert!((stats.average_debit - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lookup_and_filters() {
        let mut stack = TransactionStack::new();
        let mut food = tx(1, TransactionKind::Debit, 12.0);
        food.category = "Cafeteria".to_string();
        stack.push(food);
        stack.push(tx(2, TransactionKind::Credit, 20.0));

        assert!(stack.find_by_id(1).is_some());
        assert!(stack.find_by_id(9).is_none());
        assert_eq!(stack.filter_by_kind(TransactionKind::Credit).len(), 1);
        assert_eq!(stack.filter_by_category("cafeteria").len(), 1);
    }

    #[test]
    fn remove_by_id_breaks_lifo_when_needed() {
        let mut stack = TransactionStack::new();
        stack.push(tx(1, TransactionKind::Credit, 1.0));
        stack.push(tx(2, TransactionKind::Credit, 1.0));
        stack.push(tx(3, TransactionKind::Credit, 1.0));

        assert!(stack.remove_by_id(2));
        assert!(!stack.remove_by_id(2));
        let ids: Vec<i64> = stack.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let mut stack = TransactionStack::with_capacity(5);
        stack.push(tx(1, TransactionKind::Credit, 10.0));
        stack.push(tx(2, TransactionKind::Debit, 4.0));

        let json = stack.to_json();
        let mut restored = TransactionStack::new();
        restored.load_json(&json);

        assert_eq!(restored.max_size(), 5);
        let ids: Vec<i64> = restored.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
