use crate::{FetchTask, ScreenScope, TaskOutcome, UiExecutor};

use gh_client::{ClientError, ClientResult};

use std::future::pending;
use std::sync::{Arc, Mutex};

use tokio::time::{Duration, timeout};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct Counter {
    loading: bool,
    value: Option<u64>,
    failures: usize,
}

fn task(
    screen: &Arc<Mutex<Counter>>,
    executor: &UiExecutor,
    scope: &ScreenScope,
) -> FetchTask<Counter> {
    FetchTask::new(
        "count",
        Arc::downgrade(screen),
        executor.handle(),
        scope.clone(),
    )
}

fn apply(counter: &mut Counter, result: crate::FetchResult<u64>) -> bool {
    counter.loading = false;
    match result {
        Ok(value) => counter.value = Some(value),
        Err(_) => counter.failures += 1,
    }
    true
}

#[tokio::test]
async fn given_live_screen_when_work_succeeds_then_result_applied() {
    let mut executor = UiExecutor::new();
    let scope = ScreenScope::new();
    let screen = Arc::new(Mutex::new(Counter::default()));

    let handle = task(&screen, &executor, &scope).start(
        &mut screen.lock().unwrap(),
        |counter| counter.loading = true,
        async { Ok(7) },
        apply,
    );
    assert!(screen.lock().unwrap().loading);

    timeout(WAIT, executor.run_until_idle(&scope)).await.unwrap();

    assert_eq!(handle.await.unwrap(), TaskOutcome::Applied);
    let counter = screen.lock().unwrap();
    assert!(!counter.loading);
    assert_eq!(counter.value, Some(7));
    assert_eq!(counter.failures, 0);
}

#[tokio::test]
async fn given_live_screen_when_work_fails_then_error_delivered_once() {
    let mut executor = UiExecutor::new();
    let scope = ScreenScope::new();
    let screen = Arc::new(Mutex::new(Counter::default()));

    let handle = task(&screen, &executor, &scope).start(
        &mut screen.lock().unwrap(),
        |counter| counter.loading = true,
        async { ClientResult::<u64>::Err(ClientError::api_error(502, "Bad Gateway")) },
        |counter, result| {
            if let Err(err) = &result {
                assert_eq!(err.operation(), "count");
            }
            apply(counter, result)
        },
    );

    timeout(WAIT, executor.run_until_idle(&scope)).await.unwrap();

    assert_eq!(handle.await.unwrap(), TaskOutcome::Applied);
    let counter = screen.lock().unwrap();
    assert_eq!(counter.failures, 1);
    assert_eq!(counter.value, None);
}

#[tokio::test]
async fn given_screen_dropped_when_result_posted_then_discarded() {
    let mut executor = UiExecutor::new();
    let scope = ScreenScope::new();
    let screen = Arc::new(Mutex::new(Counter::default()));

    let handle = task(&screen, &executor, &scope).start(
        &mut screen.lock().unwrap(),
        |_| {},
        async { Ok(1) },
        |_: &mut Counter, _| panic!("reconciled into a dropped screen"),
    );

    // Result is already queued for the interactive thread when the screen goes
    let job = timeout(WAIT, executor.next_job()).await.unwrap().unwrap();
    drop(screen);
    job();

    assert_eq!(handle.await.unwrap(), TaskOutcome::Discarded);
    assert_eq!(scope.in_flight(), 0);
}

#[tokio::test]
async fn given_scope_closed_when_job_runs_then_discarded() {
    let mut executor = UiExecutor::new();
    let scope = ScreenScope::new();
    let screen = Arc::new(Mutex::new(Counter::default()));

    let handle = task(&screen, &executor, &scope).start(
        &mut screen.lock().unwrap(),
        |_| {},
        async { Ok(1) },
        apply,
    );

    let job = timeout(WAIT, executor.next_job()).await.unwrap().unwrap();
    scope.close();
    job();

    assert_eq!(handle.await.unwrap(), TaskOutcome::Discarded);
    assert_eq!(screen.lock().unwrap().value, None);
}

#[tokio::test]
async fn given_pending_work_when_scope_closed_then_cancelled() {
    let mut executor = UiExecutor::new();
    let scope = ScreenScope::new();
    let screen = Arc::new(Mutex::new(Counter::default()));

    let handle = task(&screen, &executor, &scope).start(
        &mut screen.lock().unwrap(),
        |_| {},
        pending::<ClientResult<u64>>(),
        apply,
    );
    assert_eq!(scope.in_flight(), 1);

    scope.close();

    assert_eq!(
        timeout(WAIT, handle).await.unwrap().unwrap(),
        TaskOutcome::Cancelled
    );
    timeout(WAIT, executor.run_until_idle(&scope)).await.unwrap();
    assert_eq!(executor.drain(), 0);
}

#[tokio::test]
async fn given_reconcile_rejects_when_result_arrives_then_discarded() {
    let mut executor = UiExecutor::new();
    let scope = ScreenScope::new();
    let screen = Arc::new(Mutex::new(Counter::default()));

    let handle = task(&screen, &executor, &scope).start(
        &mut screen.lock().unwrap(),
        |_| {},
        async { Ok(1) },
        |_, _| false,
    );

    timeout(WAIT, executor.run_until_idle(&scope)).await.unwrap();
    assert_eq!(handle.await.unwrap(), TaskOutcome::Discarded);
}

#[tokio::test]
async fn given_executor_dropped_when_result_ready_then_discarded() {
    let executor = UiExecutor::new();
    let scope = ScreenScope::new();
    let screen = Arc::new(Mutex::new(Counter::default()));

    let fetch = task(&screen, &executor, &scope);
    drop(executor);

    let handle = fetch.start(&mut screen.lock().unwrap(), |_| {}, async { Ok(1) }, apply);

    assert_eq!(
        timeout(WAIT, handle).await.unwrap().unwrap(),
        TaskOutcome::Discarded
    );
    assert_eq!(scope.in_flight(), 0);
}
