//! One background fetch bound to a screen.
//!
//! Lifecycle of a task:
//!
//! ```text
//! created -> loading-signaled -> running -> completed(ok | err)
//!         -> applied            (screen alive, result current)
//!         -> discarded          (screen gone, or result stale)
//! running -> cancelled          (screen scope closed first)
//! ```
//!
//! There are no retries. A failed task is finished; the user triggers a new
//! one (reload, revisit) to try again.

use crate::{FetchError, FetchResult, ScreenScope, UiHandle};

use gh_client::ClientResult;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use log::{debug, error};
use serde::Serialize;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Terminal state of a fetch task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutcome {
    /// Result reconciled into a live screen
    Applied,
    /// Result dropped: the screen was gone or the result was stale
    Discarded,
    /// Remote call abandoned because the screen scope closed
    Cancelled,
}

/// A fetch that has not been started yet.
///
/// Holds only a weak reference to its screen; the screen's owner decides
/// when the screen dies, never the task.
pub struct FetchTask<S> {
    operation: &'static str,
    target: Weak<Mutex<S>>,
    ui: UiHandle,
    scope: ScreenScope,
}

impl<S: Send + 'static> FetchTask<S> {
    pub fn new(
        operation: &'static str,
        target: Weak<Mutex<S>>,
        ui: UiHandle,
        scope: ScreenScope,
    ) -> Self {
        Self {
            operation,
            target,
            ui,
            scope,
        }
    }

    /// Start the task.
    ///
    /// Must be called on the interactive thread by the screen itself, which
    /// passes `screen` to prove it is alive. `before_start` signals loading.
    /// `work` runs off the interactive thread. `reconcile` runs back on the
    /// interactive thread only if the screen still exists; it returns false
    /// when it chose to ignore the result.
    pub fn start<T, W, B, R>(
        self,
        screen: &mut S,
        before_start: B,
        work: W,
        reconcile: R,
    ) -> JoinHandle<TaskOutcome>
    where
        T: Send + 'static,
        W: Future<Output = ClientResult<T>> + Send + 'static,
        B: FnOnce(&mut S),
        R: FnOnce(&mut S, FetchResult<T>) -> bool + Send + 'static,
    {
        let Self {
            operation,
            target,
            ui,
            scope,
        } = self;

        before_start(screen);
        debug!("{}: loading signaled", operation);

        let ticket = scope.track();
        let mut guard = scope.subscribe_guard();

        tokio::spawn(async move {
            debug!("{}: running", operation);

            let result = tokio::select! {
                biased;
                _ = guard.wait() => {
                    debug!("{}: screen closed, cancelling", operation);
                    return TaskOutcome::Cancelled;
                }
                result = work => result,
            };

            let result = result.map_err(|e| {
                let err = FetchError::remote(operation, e);
                error!("{}", err);
                err
            });

            let (done_tx, done_rx) = oneshot::channel();
            let posted = ui.post(move || {
                let _ticket = ticket;
                let outcome = reconcile_on_screen(operation, &target, &scope, result, reconcile);
                let _ = done_tx.send(outcome);
            });

            if !posted {
                debug!("{}: interactive executor gone, dropping result", operation);
                return TaskOutcome::Discarded;
            }

            done_rx.await.unwrap_or(TaskOutcome::Discarded)
        })
    }
}

/// Runs on the interactive thread.
fn reconcile_on_screen<S, T, R>(
    operation: &'static str,
    target: &Weak<Mutex<S>>,
    scope: &ScreenScope,
    result: FetchResult<T>,
    reconcile: R,
) -> TaskOutcome
where
    R: FnOnce(&mut S, FetchResult<T>) -> bool,
{
    let Some(screen) = target.upgrade() else {
        debug!("{}: screen gone, dropping result", operation);
        return TaskOutcome::Discarded;
    };

    if scope.is_closed() {
        debug!("{}: screen closed, dropping result", operation);
        return TaskOutcome::Discarded;
    }

    let mut screen = lock(&screen);
    if reconcile(&mut screen, result) {
        TaskOutcome::Applied
    } else {
        debug!("{}: stale result ignored", operation);
        TaskOutcome::Discarded
    }
}

/// Screens are only touched from the interactive thread; a poisoned lock
/// just means an earlier job panicked, and the state is still the latest.
pub(crate) fn lock<S>(screen: &Arc<Mutex<S>>) -> MutexGuard<'_, S> {
    screen
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
