//! # Transaction Handlers
//!
//! Handlers for creating transactions and for the local history pipeline
//! (filtering, sorting, paging, recently viewed).

use async_channel::Sender;
use parking_lot::RwLock;
use shared::CreateTransactionRequest;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::sort::SortKey;
use crate::utils::validation::{validate_amount, validate_required};
use crate::utils::TransactionFilters;

/// Handle a new-transaction submission
///
/// Internal handler function - use [`crate::app::App::handle_create_transaction`] instead.
pub(crate) fn handle_create_transaction(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: CreateTransactionRequest,
) {
    let amount_check = validate_amount(request.amount);
    if !amount_check.is_valid {
        state.write().currency.error = amount_check.error;
        return;
    }
    let description_check = validate_required(&request.description, "Description");
    if !description_check.is_valid {
        state.write().currency.error = description_check.error;
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => {
            state.write().currency.error = Some("API client not available".to_string());
            return;
        }
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api_client.create_transaction(request).await;
        let _ = tx.send(AppEvent::TransactionCreated(result)).await;
    });

    state.write().currency.error = None;
}

/// Record that a transaction was opened in detail view, pushing it onto the
/// recently viewed stack.
pub(crate) fn handle_view_transaction(state: Arc<RwLock<AppState>>, id: i64) {
    let mut state = state.write();
    let Some(transaction) = state
        .currency
        .transactions
        .iter()
        .find(|t| t.id == id)
        .cloned()
    else {
        return;
    };

    // Re-viewing moves the record back to the top instead of duplicating it.
    state.currency.recent.remove_by_id(id);
    state.currency.recent.push(transaction);
}

/// Replace the active filters and rebuild the paged view.
pub(crate) fn handle_filter_change(state: Arc<RwLock<AppState>>, filters: TransactionFilters) {
    let mut state = state.write();
    state.currency.filters = filters;
    state.currency.apply_filters();
}

/// Toggle a sort column and rebuild the paged view.
pub(crate) fn handle_sort_toggle(state: Arc<RwLock<AppState>>, key: SortKey) {
    let mut state = state.write();
    state.currency.sort.toggle(key);
    state.currency.apply_filters();
}

/// Jump to a history page (clamped).
pub(crate) fn handle_page_change(state: Arc<RwLock<AppState>>, page: usize) {
    state.write().currency.pager.go_to_page(page);
}
