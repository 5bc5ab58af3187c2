//! Cross-module flows: session lifecycle through the event handler, the
//! history pipeline from raw fetch to paged view, and the recent-activity
//! stack scenario end to end.

use client::app::{App, AppEvent};
use client::collections::TransactionStack;
use client::core::ApiError;
use client::services::SessionStore;
use client::utils::{SortDirection, SortKey, TransactionFilters};
use shared::{
    AuthResponse, Notification, NotificationKind, Transaction, TransactionKind, TransactionStatus,
    UserInfo, UserRole,
};

fn user() -> UserInfo {
    UserInfo {
        id: 7,
        first_name: "Ana".to_string(),
        last_name: "Rojas".to_string(),
        email: "ana@unab.edu.co".to_string(),
        role: UserRole::Student,
        student_code: Some("U00123456".to_string()),
    }
}

fn auth_response() -> AuthResponse {
    AuthResponse {
        token: "jwt-token".to_string(),
        refresh_token: Some("refresh-token".to_string()),
        user: user(),
    }
}

fn tx(id: i64, kind: TransactionKind, amount: f64, day: u32) -> Transaction {
    Transaction {
        id,
        account_id: 1,
        kind,
        amount,
        category: "General".to_string(),
        description: format!("transaction {}", id),
        reference: None,
        timestamp: format!("2026-03-{:02}T12:00:00", day),
        status: TransactionStatus::Completed,
        pushed_at: None,
    }
}

fn temp_store(label: &str) -> (SessionStore, std::path::PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "dunab-{}-{}.json",
        label,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    (SessionStore::open_at(path.clone()), path)
}

#[tokio::test]
async fn login_result_populates_and_persists_the_session() {
    let (store, path) = temp_store("login");
    let mut app = App::with_store(store);

    app.handle_event(AppEvent::LoginResult(Ok(auth_response())));

    {
        let state = app.state.read();
        assert!(state.session.is_authenticated());
        assert_eq!(state.session.token.as_deref(), Some("jwt-token"));
        assert_eq!(state.session.user.as_ref().unwrap().id, 7);
        assert!(state.session.error.is_none());
        assert!(state.loading.is_none());
    }

    // A fresh store at the same path sees the persisted session.
    let reopened = SessionStore::open_at(path.clone());
    let session = reopened.load_session().expect("session persisted");
    assert_eq!(session.token, "jwt-token");
    assert_eq!(session.user.email, "ana@unab.edu.co");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn failed_login_surfaces_the_backend_message() {
    let (store, path) = temp_store("login-fail");
    let mut app = App::with_store(store);

    app.handle_event(AppEvent::LoginResult(Err(ApiError::status(
        401,
        "Credenciales inválidas",
    ))));

    let state = app.state.read();
    assert!(!state.session.is_authenticated());
    assert_eq!(state.session.error.as_deref(), Some("Credenciales inválidas"));
    drop(state);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn unauthorized_background_result_forces_logout() {
    let (store, path) = temp_store("forced-logout");
    let mut app = App::with_store(store);
    app.handle_event(AppEvent::LoginResult(Ok(auth_response())));
    app.handle_event(AppEvent::TransactionsResult(Ok(vec![tx(
        1,
        TransactionKind::Credit,
        10.0,
        1,
    )])));
    assert!(app.state.read().session.is_authenticated());

    app.handle_event(AppEvent::BalanceResult(Err(ApiError::status(
        401,
        "Token expired",
    ))));

    let state = app.state.read();
    assert!(!state.session.is_authenticated());
    assert!(state.currency.transactions.is_empty());
    assert!(state.notifications.queue.is_empty());
    drop(state);

    assert!(SessionStore::open_at(path.clone()).load_session().is_none());
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn history_flows_through_filter_sort_and_pager() {
    let (store, path) = temp_store("pipeline");
    let mut app = App::with_store(store);

    let history: Vec<Transaction> = (1..=12)
        .map(|id| {
            let kind = if id % 2 == 0 {
                TransactionKind::Debit
            } else {
                TransactionKind::Credit
            };
            tx(id, kind, 10.0 * id as f64, id as u32)
        })
        .collect();
    app.handle_event(AppEvent::TransactionsResult(Ok(history)));

    {
        // Default sort is date descending, default page size 10.
        let state = app.state.read();
        assert_eq!(state.currency.pager.total_pages(), 2);
        let first: Vec<i64> = state
            .currency
            .pager
            .current_page_items()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(first, vec![12, 11, 10, 9, 8, 7, 6, 5, 4, 3]);
    }

    // Narrow to credits only: 6 rows, one page, page reset to 1.
    app.handle_page_change(2);
    assert_eq!(app.state.read().currency.pager.current_page(), 2);
    let mut filters = TransactionFilters::default();
    filters.kind = Some(TransactionKind::Credit);
    app.handle_filter_change(filters);

    {
        let state = app.state.read();
        assert_eq!(state.currency.pager.current_page(), 1);
        assert_eq!(state.currency.pager.total_pages(), 1);
        let ids: Vec<i64> = state
            .currency
            .pager
            .current_page_items()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![11, 9, 7, 5, 3, 1]);
    }

    // Re-selecting the date column flips it to ascending.
    app.handle_sort_toggle(SortKey::Date);
    {
        let state = app.state.read();
        assert_eq!(state.currency.sort.direction, SortDirection::Ascending);
        let ids: Vec<i64> = state
            .currency
            .pager
            .current_page_items()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 5, 7, 9, 11]);
    }

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn accepted_transaction_updates_history_and_notifies() {
    let (store, path) = temp_store("created");
    let mut app = App::with_store(store);
    app.handle_event(AppEvent::LoginResult(Ok(auth_response())));
    app.handle_event(AppEvent::TransactionsResult(Ok(vec![tx(
        1,
        TransactionKind::Credit,
        50.0,
        1,
    )])));

    app.handle_event(AppEvent::TransactionCreated(Ok(tx(
        2,
        TransactionKind::Debit,
        12.5,
        2,
    ))));

    let state = app.state.read();
    assert_eq!(state.currency.transactions.len(), 2);
    assert_eq!(state.currency.transactions[0].id, 2);
    let newest = state.notifications.queue.recent(1);
    assert_eq!(newest[0].kind, NotificationKind::CurrencyDebit);
    assert!(newest[0].message.contains("12.50"));
    drop(state);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn rejected_transaction_surfaces_the_error() {
    let (store, path) = temp_store("rejected");
    let mut app = App::with_store(store);

    app.handle_event(AppEvent::TransactionCreated(Err(ApiError::status(
        409,
        "Saldo insuficiente",
    ))));

    assert_eq!(
        app.state.read().currency.error.as_deref(),
        Some("Saldo insuficiente")
    );
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn notification_refresh_replaces_the_queue_and_counter() {
    let (store, path) = temp_store("notifications");
    let mut app = App::with_store(store);

    let notifications: Vec<Notification> = (1..=3)
        .map(|id| {
            let mut n = Notification::new(NotificationKind::Info, format!("n{}", id));
            n.id = id;
            n.created_at = format!("2026-03-0{}T08:00:00", id);
            n
        })
        .collect();
    app.handle_event(AppEvent::NotificationsResult(Ok(notifications)));
    app.handle_event(AppEvent::UnreadCountResult(Ok(3)));

    {
        let state = app.state.read();
        assert_eq!(state.notifications.queue.len(), 3);
        assert_eq!(state.notifications.unread_count, 3);
    }

    app.handle_mark_notification_read(2);
    {
        let state = app.state.read();
        assert_eq!(state.notifications.unread_count, 2);
        assert_eq!(state.notifications.queue.unread_count(), 2);
    }

    // A failed background sync is swallowed; local state stands.
    app.handle_event(AppEvent::NotificationMarkedRead(
        2,
        Err(ApiError::network("connection refused")),
    ));
    assert_eq!(app.state.read().notifications.unread_count, 2);

    let _ = std::fs::remove_file(&path);
}

/// Twelve chronological transactions through a stack capped at ten: the two
/// oldest fall out, the signed total covers only the survivors, and popping
/// drains them newest first down to the empty sentinel.
#[test]
fn recent_stack_scenario_with_a_dozen_transactions() {
    let mut stack = TransactionStack::with_capacity(10);

    // 7 credits and 5 debits, amounts 10..=120, pushed oldest first.
    let kinds = [
        TransactionKind::Credit,
        TransactionKind::Debit,
        TransactionKind::Credit,
        TransactionKind::Credit,
        TransactionKind::Debit,
        TransactionKind::Credit,
        TransactionKind::Debit,
        TransactionKind::Credit,
        TransactionKind::Debit,
        TransactionKind::Credit,
        TransactionKind::Debit,
        TransactionKind::Credit,
    ];
    for (i, kind) in kinds.iter().enumerate() {
        let id = i as i64 + 1;
        stack.push(tx(id, *kind, 10.0 * id as f64, id as u32));
    }

    assert_eq!(stack.len(), 10);
    assert!(stack.is_full());
    // Ids 1 and 2 were evicted.
    assert!(stack.find_by_id(1).is_none());
    assert!(stack.find_by_id(2).is_none());

    // Signed total over the surviving ids 3..=12.
    let expected: f64 = (3usize..=12)
        .map(|id| {
            let amount = 10.0 * id as f64;
            match kinds[id - 1] {
                TransactionKind::Credit => amount,
                TransactionKind::Debit => -amount,
            }
        })
        .sum();
    assert!((stack.total_amount() - expected).abs() < 1e-9);

    // Strict reverse-chronological drain.
    for expected_id in (3i64..=12).rev() {
        assert_eq!(stack.pop().unwrap().id, expected_id);
    }
    assert!(stack.is_empty());
    assert!(stack.pop().is_none());
    assert_eq!(stack.statistics(), Default::default());
}
