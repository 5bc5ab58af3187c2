//! # Currency Tasks
//!
//! Async tasks for the DUNAB account: account lookup, balance refresh,
//! history and totals.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;

/// Fetch the account owned by the signed-in user.
///
/// Internal task function - spawns an async task and reports back via
/// [`AppEvent::AccountResult`].
pub(crate) fn fetch_account(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, owner_id) = {
        let state = state.read();
        let owner_id = state.session.user.as_ref().map(|u| u.id);
        (state.api_client.clone(), owner_id)
    };

    let (Some(api_client), Some(owner_id)) = (api_client, owner_id) else {
        return;
    };
    spawn(async move {
        let result = api_client.account_for_owner(owner_id).await;
        let _ = event_tx.send(AppEvent::AccountResult(result)).await;
    });
}

/// Refresh the account balance.
pub(crate) fn fetch_balance(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, account_id) = {
        let state = state.read();
        let account_id = state.currency.account.as_ref().map(|a| a.id);
        (state.api_client.clone(), account_id)
    };

    let (Some(api_client), Some(account_id)) = (api_client, account_id) else {
        return;
    };
    spawn(async move {
        let result = api_client.balance(account_id).await;
        let _ = event_tx.send(AppEvent::BalanceResult(result)).await;
    });
}

/// Fetch the full transaction history of the current account.
///
/// Skips when a fetch is already in flight to prevent task pileup.
pub(crate) fn fetch_transactions(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, account_id) = {
        let mut state = state.write();
        if state.currency.fetching {
            return;
        }
        let account_id = state.currency.account.as_ref().map(|a| a.id);
        if api_and_account_ready(&state.api_client, account_id) {
            state.currency.fetching = true;
        }
        (state.api_client.clone(), account_id)
    };

    let (Some(api_client), Some(account_id)) = (api_client, account_id) else {
        return;
    };
    let state_arc = Arc::clone(&state);
    spawn(async move {
        let result = api_client.account_transactions(account_id).await;

        {
            let mut state = state_arc.write();
            state.currency.fetching = false;
        }

        let _ = event_tx.send(AppEvent::TransactionsResult(result)).await;
    });
}

/// Fetch aggregate credit/debit totals of the current account.
pub(crate) fn fetch_totals(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, account_id) = {
        let state = state.read();
        let account_id = state.currency.account.as_ref().map(|a| a.id);
        (state.api_client.clone(), account_id)
    };

    let (Some(api_client), Some(account_id)) = (api_client, account_id) else {
        return;
    };
    spawn(async move {
        let result = api_client.transaction_totals(account_id).await;
        let _ = event_tx.send(AppEvent::TotalsResult(result)).await;
    });
}

fn api_and_account_ready(
    api_client: &Option<Arc<crate::services::ApiClient>>,
    account_id: Option<i64>,
) -> bool {
    api_client.is_some() && account_id.is_some()
}
