//! # Notification Tasks
//!
//! One-shot notification fetches plus the long-lived polling loop.

use async_channel::Sender;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;

/// Base interval between notification polls.
pub(crate) const POLL_INTERVAL_SECS: u64 = 30;
/// Random extra delay added to each poll so many clients started together
/// do not hit the backend in lockstep.
pub(crate) const POLL_JITTER_MS: u64 = 5_000;

/// Fetch the notification list once.
///
/// Skips when a fetch is already in flight to prevent task pileup.
pub(crate) fn fetch_notifications(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.notifications.fetching {
            return;
        }
        if state.api_client.is_some() {
            state.notifications.fetching = true;
        }
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        return;
    };
    let state_arc = Arc::clone(&state);
    spawn(async move {
        let result = api_client.notifications().await;

        {
            let mut state = state_arc.write();
            state.notifications.fetching = false;
        }

        let _ = event_tx.send(AppEvent::NotificationsResult(result)).await;
    });
}

/// Fetch the server-side unread counter once.
pub(crate) fn fetch_unread_count(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();

    let Some(api_client) = api_client else {
        return;
    };
    spawn(async move {
        let result = api_client.unread_count().await;
        let _ = event_tx.send(AppEvent::UnreadCountResult(result)).await;
    });
}

/// Start the notification polling loop.
///
/// Polls every [`POLL_INTERVAL_SECS`] plus up to [`POLL_JITTER_MS`] of
/// random jitter while a session is active, and exits as soon as the user
/// signs out. Fetch errors are reported through the event channel like any
/// other result; the loop itself never dies on them.
pub(crate) fn spawn_notification_poller(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        tracing::info!(
            interval_secs = POLL_INTERVAL_SECS,
            jitter_ms = POLL_JITTER_MS,
            "Notification poller started"
        );

        loop {
            let jitter = rand::rng().random_range(0..POLL_JITTER_MS);
            tokio::time::sleep(
                tokio::time::Duration::from_secs(POLL_INTERVAL_SECS)
                    + tokio::time::Duration::from_millis(jitter),
            )
            .await;

            let api_client = {
                let state = state.read();
                if !state.session.is_authenticated() {
                    tracing::info!("Session ended, stopping notification poller");
                    break;
                }
                state.api_client.clone()
            };

            let Some(api_client) = api_client else {
                break;
            };

            let notifications = api_client.notifications().await;
            let _ = event_tx
                .send(AppEvent::NotificationsResult(notifications))
                .await;

            let count = api_client.unread_count().await;
            let _ = event_tx.send(AppEvent::UnreadCountResult(count)).await;
        }
    });
}
