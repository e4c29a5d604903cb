use crate::{ScopeGuard, ScreenScope};

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_scope_when_closed_then_guard_notified() {
    let scope = ScreenScope::new();
    let mut guard = ScopeGuard::new(&scope);

    let scope_clone = scope.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        scope_clone.close();
    });

    let result = timeout(Duration::from_millis(100), guard.wait()).await;
    assert!(result.is_ok(), "Close signal should be received");
}

#[tokio::test]
async fn given_multiple_guards_when_closed_then_all_notified() {
    let scope = ScreenScope::new();
    let mut guard1 = scope.subscribe_guard();
    let mut guard2 = scope.subscribe_guard();

    scope.close();

    assert!(timeout(Duration::from_millis(10), guard1.wait()).await.is_ok());
    assert!(timeout(Duration::from_millis(10), guard2.wait()).await.is_ok());
}

#[tokio::test]
async fn given_closed_scope_when_guard_subscribes_late_then_wait_returns() {
    let scope = ScreenScope::new();
    scope.close();

    let mut guard = scope.subscribe_guard();
    assert!(timeout(Duration::from_millis(10), guard.wait()).await.is_ok());
}

#[test]
fn given_new_scope_when_checked_then_not_closed() {
    let scope = ScreenScope::new();
    let mut guard = ScopeGuard::new(&scope);

    assert!(!scope.is_closed());
    assert!(!guard.poll_closed());
}

#[test]
fn given_scope_when_closed_twice_then_stays_closed() {
    let scope = ScreenScope::new();
    let mut guard = scope.subscribe_guard();

    scope.close();
    scope.close();

    assert!(scope.is_closed());
    assert!(guard.poll_closed());
}

#[test]
fn given_tickets_when_dropped_then_in_flight_counts_down() {
    let scope = ScreenScope::new();

    let first = scope.track();
    let second = scope.track();
    assert_eq!(scope.in_flight(), 2);

    drop(first);
    assert_eq!(scope.in_flight(), 1);

    drop(second);
    assert_eq!(scope.in_flight(), 0);
}

#[tokio::test]
async fn given_last_ticket_dropped_when_waiting_idle_then_resolves() {
    let scope = ScreenScope::new();
    let ticket = scope.track();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(ticket);
    });

    assert!(timeout(Duration::from_millis(100), scope.idle()).await.is_ok());
}
