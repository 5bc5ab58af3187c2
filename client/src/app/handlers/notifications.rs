//! # Notification Handlers
//!
//! Handlers for read/delete actions on notifications. Each action updates
//! the local queue immediately and syncs the backend in the background; the
//! poller reconciles any drift on its next pass.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;

/// Handle marking one notification as read
///
/// Internal handler function - use [`crate::app::App::handle_mark_notification_read`] instead.
pub(crate) fn handle_mark_read(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    let api_client = {
        let mut state = state.write();
        if !state.notifications.queue.mark_as_read(id) {
            return;
        }
        state.notifications.unread_count = state.notifications.unread_count.saturating_sub(1);
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        return;
    };
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api_client.mark_notification_read(id).await;
        let _ = tx.send(AppEvent::NotificationMarkedRead(id, result)).await;
    });
}

/// Handle marking every notification as read
///
/// Internal handler function - use [`crate::app::App::handle_mark_all_notifications_read`] instead.
pub(crate) fn handle_mark_all_read(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.notifications.queue.mark_all_as_read();
        state.notifications.unread_count = 0;
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        return;
    };
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api_client.mark_all_notifications_read().await;
        let _ = tx.send(AppEvent::AllNotificationsMarkedRead(result)).await;
    });
}

/// Handle deleting one notification
///
/// Internal handler function - use [`crate::app::App::handle_delete_notification`] instead.
pub(crate) fn handle_delete(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    let api_client = {
        let mut state = state.write();
        let was_unread = state
            .notifications
            .queue
            .iter()
            .any(|n| n.id == id && !n.read);
        if !state.notifications.queue.remove(id) {
            return;
        }
        if was_unread {
            state.notifications.unread_count = state.notifications.unread_count.saturating_sub(1);
        }
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        return;
    };
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api_client.delete_notification(id).await;
        let _ = tx.send(AppEvent::NotificationDeleted(id, result)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_channel::unbounded;
    use shared::{Notification, NotificationKind};

    fn state_with_notifications() -> Arc<RwLock<AppState>> {
        let state = Arc::new(RwLock::new(AppState::default()));
        {
            let mut s = state.write();
            for id in 1..=3 {
                let mut n = Notification::new(NotificationKind::Info, format!("n{}", id));
                n.id = id;
                s.notifications.queue.enqueue(n);
            }
            s.notifications.unread_count = 3;
        }
        state
    }

    #[tokio::test]
    async fn mark_read_updates_queue_and_counter_locally() {
        let state = state_with_notifications();
        let (tx, _rx) = unbounded();

        handle_mark_read(state.clone(), tx, 2);

        let s = state.read();
        assert_eq!(s.notifications.unread_count, 2);
        assert_eq!(s.notifications.queue.unread_count(), 2);
    }

    #[tokio::test]
    async fn mark_read_on_unknown_id_changes_nothing() {
        let state = state_with_notifications();
        let (tx, rx) = unbounded();

        handle_mark_read(state.clone(), tx, 42);

        assert_eq!(state.read().notifications.unread_count, 3);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn mark_all_read_zeroes_counter() {
        let state = state_with_notifications();
        let (tx, _rx) = unbounded();

        handle_mark_all_read(state.clone(), tx);

        let s = state.read();
        assert_eq!(s.notifications.unread_count, 0);
        assert_eq!(s.notifications.queue.unread_count(), 0);
    }

    #[tokio::test]
    async fn delete_adjusts_counter_only_for_unread() {
        let state = state_with_notifications();
        state.write().notifications.queue.mark_as_read(1);
        state.write().notifications.unread_count = 2;
        let (tx, _rx) = unbounded();

        handle_delete(state.clone(), tx.clone(), 1);
        assert_eq!(state.read().notifications.unread_count, 2);

        handle_delete(state.clone(), tx, 2);
        assert_eq!(state.read().notifications.unread_count, 1);
        assert_eq!(state.read().notifications.queue.len(), 1);
    }
}
