//! # Campus Tasks
//!
//! Async tasks for events and academic progress.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;

/// Fetch the campus event list.
pub(crate) fn fetch_events(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.events.fetching {
            return;
        }
        if state.api_client.is_some() {
            state.events.fetching = true;
        }
        state.api_client.clone()
    };

    let Some(api_client) = api_client else {
        return;
    };
    let state_arc = Arc::clone(&state);
    spawn(async move {
        let result = api_client.events().await;

        {
            let mut state = state_arc.write();
            state.events.fetching = false;
        }

        let _ = event_tx.send(AppEvent::EventsResult(result)).await;
    });
}

/// Register the signed-in user for an event.
pub(crate) fn register_for_event(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    event_id: i64,
) {
    let api_client = state.read().api_client.clone();

    let Some(api_client) = api_client else {
        return;
    };
    spawn(async move {
        let result = api_client.register_for_event(event_id).await;
        let _ = event_tx
            .send(AppEvent::EventRegistered(event_id, result))
            .await;
    });
}

/// Confirm attendance at an event; the backend credits the reward.
pub(crate) fn confirm_attendance(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    event_id: i64,
) {
    let api_client = state.read().api_client.clone();

    let Some(api_client) = api_client else {
        return;
    };
    spawn(async move {
        let result = api_client.confirm_attendance(event_id).await;
        let _ = event_tx
            .send(AppEvent::EventRegistered(event_id, result))
            .await;
    });
}

/// Fetch the student profile and academic progress of the signed-in user.
pub(crate) fn fetch_academic(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, student_id) = {
        let mut state = state.write();
        if state.academic.fetching {
            return;
        }
        let student_id = state.session.user.as_ref().map(|u| u.id);
        if state.api_client.is_some() && student_id.is_some() {
            state.academic.fetching = true;
        }
        (state.api_client.clone(), student_id)
    };

    let (Some(api_client), Some(student_id)) = (api_client, student_id) else {
        return;
    };
    let state_arc = Arc::clone(&state);
    spawn(async move {
        let profile = api_client.student_profile(student_id).await;
        let progress = api_client.academic_progress(student_id).await;

        {
            let mut state = state_arc.write();
            state.academic.fetching = false;
        }

        let _ = event_tx.send(AppEvent::ProfileResult(profile)).await;
        let _ = event_tx.send(AppEvent::ProgressResult(progress)).await;
    });
}
