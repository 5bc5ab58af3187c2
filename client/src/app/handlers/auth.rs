//! # Authentication Handlers
//!
//! Handlers for login, registration and logout.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{LoginRequest, RegisterRequest};
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::validation::{validate_email, validate_password, validate_required};

/// Handle a login submission
///
/// Internal handler function - use [`crate::app::App::handle_login`] instead.
pub(crate) fn handle_login(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let email_check = validate_email(&email);
    if !email_check.is_valid {
        state.write().session.error = email_check.error;
        return;
    }
    if password.is_empty() {
        state.write().session.error = Some("Password is required".to_string());
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => {
            state.write().session.error = Some("API client not available".to_string());
            return;
        }
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppEvent::Loading("Signing in...".to_string())).await;
        let result = api_client.login(LoginRequest { email, password }).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });

    let mut state = state.write();
    state.session.error = None;
    state.loading = Some("Signing in...".to_string());
}

/// Handle a registration submission
///
/// Internal handler function - use [`crate::app::App::handle_register`] instead.
pub(crate) fn handle_register(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: RegisterRequest,
    confirm_password: String,
) {
    for check in [
        validate_required(&request.first_name, "First name"),
        validate_required(&request.last_name, "Last name"),
        validate_email(&request.email),
        validate_password(&request.password),
    ] {
        if !check.is_valid {
            state.write().session.error = check.error;
            return;
        }
    }

    if request.password != confirm_password {
        state.write().session.error = Some("Passwords don't match".to_string());
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => {
            state.write().session.error = Some("API client not available".to_string());
            return;
        }
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppEvent::Loading("Creating account...".to_string())).await;
        let result = api_client.register(request).await;
        let _ = tx.send(AppEvent::RegisterResult(result)).await;
    });

    let mut state = state.write();
    state.session.error = None;
    state.loading = Some("Creating account...".to_string());
}

/// Handle a logout request. Local state is cleared by the event handler;
/// the server-side invalidation is best effort.
///
/// Internal handler function - use [`crate::app::App::handle_logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();

    let tx = event_tx.clone();
    tokio::spawn(async move {
        if let Some(api_client) = api_client {
            if let Err(e) = api_client.logout().await {
                tracing::warn!(error = %e, "Server-side logout failed, continuing locally");
            }
        }
        let _ = tx.send(AppEvent::LogoutCompleted).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_channel::unbounded;

    #[tokio::test]
    async fn login_rejects_bad_email_without_spawning() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (tx, rx) = unbounded();

        handle_login(state.clone(), tx, "not-an-email".to_string(), "pw123".to_string());

        assert!(state.read().session.error.is_some());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn login_rejects_empty_password() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (tx, rx) = unbounded();

        handle_login(state.clone(), tx, "ana@unab.edu.co".to_string(), String::new());

        assert_eq!(
            state.read().session.error.as_deref(),
            Some("Password is required")
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn register_rejects_password_mismatch() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (tx, _rx) = unbounded();

        let request = RegisterRequest {
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            email: "ana@unab.edu.co".to_string(),
            password: "abc123".to_string(),
            student_code: None,
        };
        handle_register(state.clone(), tx, request, "different1".to_string());

        assert_eq!(
            state.read().session.error.as_deref(),
            Some("Passwords don't match")
        );
    }
}
