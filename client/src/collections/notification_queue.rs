//! # Notification Queue
//!
//! Bounded FIFO queue over a `VecDeque`. New notifications land at the back;
//! when the queue is full the oldest (front) entry is evicted first, so the
//! queue always holds the most recent `max_size` notifications in arrival
//! order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use shared::{Notification, NotificationKind};

use super::{assign_local_id, now_iso};

/// Capacity used by `NotificationQueue::new`.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 50;

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    max_size: usize,
}

/// Serialized form of the queue.
#[derive(Debug, Serialize, Deserialize)]
struct QueueSnapshot {
    #[serde(rename = "maxSize")]
    max_size: usize,
    size: usize,
    items: Vec<Notification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_NOTIFICATIONS)
    }

    /// A zero capacity is bumped to 1 so enqueue can always succeed.
    pub fn with_capacity(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            items: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Append a notification, evicting the oldest entry when full.
    ///
    /// Locally created notifications (id 0 or empty timestamp) get a local
    /// id and the current instant filled in. Always succeeds.
    pub fn enqueue(&mut self, mut notification: Notification) -> bool {
        if notification.id == 0 {
            notification.id = assign_local_id();
        }
        if notification.created_at.is_empty() {
            notification.created_at = now_iso();
        }

        if self.items.len() >= self.max_size {
            if let Some(evicted) = self.items.pop_front() {
                tracing::debug!(id = evicted.id, "Notification queue full, evicted oldest");
            }
        }
        self.items.push_back(notification);
        true
    }

    /// Remove and return the oldest notification.
    pub fn dequeue(&mut self) -> Option<Notification> {
        self.items.pop_front()
    }

    /// The oldest notification without removing it.
    pub fn peek(&self) -> Option<&Notification> {
        self.items.front()
    }

    /// Mark one notification as read. Returns whether the id was found.
    pub fn mark_as_read(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark everything read, returning how many entries flipped.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut flipped = 0;
        for notification in self.items.iter_mut() {
            if !notification.read {
                notification.read = true;
                flipped += 1;
            }
        }
        flipped
    }

    /// Remove a notification by id from anywhere in the queue.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.items.iter().position(|n| n.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn filter_by_kind(&self, kind: NotificationKind) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.kind == kind).collect()
    }

    pub fn unread(&self) -> Vec<&Notification> {
        self.items.iter().filter(|n| !n.read).collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// The `n` most recent notifications, newest first.
    pub fn recent(&self, n: usize) -> Vec<&Notification> {
        self.items.iter().rev().take(n).collect()
    }

    /// Replace the whole queue with a server-fetched list, keeping only the
    /// newest `max_size` entries when the list is longer.
    pub fn replace_all(&mut self, notifications: Vec<Notification>) {
        self.items.clear();
        let skip = notifications.len().saturating_sub(self.max_size);
        self.items.extend(notifications.into_iter().skip(skip));
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

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Snapshot the queue as JSON.
    pub fn to_json(&self) -> String {
        let snapshot = QueueSnapshot {
            max_size: self.max_size,
            size: self.items.len(),
            items: self.items.iter().cloned().collect(),
        };
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Restore from a JSON snapshot. Malformed input leaves the queue
    /// unchanged.
    pub fn load_json(&mut self, json: &str) {
        match serde_json::from_str::<QueueSnapshot>(json) {
            Ok(snapshot) => {
                self.max_size = snapshot.max_size.max(1);
                self.replace_all(snapshot.items);
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed notification queue snapshot: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, message: &str) -> Notification {
        Notification {
            id,
            message: message.to_string(),
            kind: NotificationKind::Info,
            read: false,
            created_at: "2026-01-15T10:00:00".to_string(),
        }
    }

    #[test]
    fn fifo_order_is_preserved() {
        let mut queue = NotificationQueue::new();
        for i in 1..=5 {
            assert!(queue.enqueue(note(i, &format!("n{}", i))));
        }

        for expected in 1..=5 {
            assert_eq!(queue.dequeue().unwrap().id, expected);
        }
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn full_queue_evicts_oldest() {
        let mut queue = NotificationQueue::with_capacity(3);
        for i in 1..=3 {
            queue.enqueue(note(i, "x"));
        }
        assert!(queue.is_full());
        assert_eq!(queue.remaining_capacity(), 0);

        assert!(queue.enqueue(note(4, "x")));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().unwrap().id, 2);
        let ids: Vec<i64> = queue.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn enqueue_assigns_local_id_and_timestamp() {
        let mut queue = NotificationQueue::new();
        let mut n = Notification::new(NotificationKind::System, "hello");
        n.id = 0;
        n.created_at.clear();
        queue.enqueue(n);

        let stored = queue.peek().unwrap();
        assert!(stored.id > 0);
        assert!(shared::utils::parse_timestamp(&stored.created_at).is_some());
    }

    #[test]
    fn read_tracking() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(note(1, "a"));
        queue.enqueue(note(2, "b"));
        queue.enqueue(note(3, "c"));
        assert_eq!(queue.unread_count(), 3);

        assert!(queue.mark_as_read(2));
        assert!(!queue.mark_as_read(99));
        assert_eq!(queue.unread_count(), 2);
        assert_eq!(queue.unread().len(), 2);

        assert_eq!(queue.mark_all_as_read(), 2);
        assert_eq!(queue.unread_count(), 0);
        assert_eq!(queue.mark_all_as_read(), 0);
    }

    #[test]
    fn remove_by_id() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(note(1, "a"));
        queue.enqueue(note(2, "b"));

        assert!(queue.remove(1));
        assert!(!queue.remove(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek().unwrap().id, 2);
    }

    #[test]
    fn filter_and_recent() {
        let mut queue = NotificationQueue::new();
        let mut credit = note(1, "earned");
        credit.kind = NotificationKind::CurrencyCredit;
        queue.enqueue(credit);
        queue.enqueue(note(2, "plain"));
        queue.enqueue(note(3, "plain"));

        assert_eq!(queue.filter_by_kind(NotificationKind::CurrencyCredit).len(), 1);
        let recent: Vec<i64> = queue.recent(2).iter().map(|n| n.id).collect();
        assert_eq!(recent, vec![3, 2]);
    }

    #[test]
    fn replace_all_keeps_newest_when_over_capacity() {
        let mut queue = NotificationQueue::with_capacity(2);
        queue.replace_all((1..=5).map(|i| note(i, "x")).collect());
        let ids: Vec<i64> = queue.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn json_round_trip() {
        let mut queue = NotificationQueue::with_capacity(5);
        queue.enqueue(note(1, "a"));
        queue.enqueue(note(2, "b"));
        queue.mark_as_read(1);

        let json = queue.to_json();
        let mut restored = NotificationQueue::new();
        restored.load_json(&json);

        assert_eq!(restored.max_size(), 5);
        assert_eq!(restored.len(), 2);
        assert!(restored.iter().next().unwrap().read);
    }

    #[test]
    fn malformed_snapshot_is_ignored() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(note(1, "keep"));
        queue.load_json("not json at all");
        assert_eq!(queue.len(), 1);
    }
}
