use crate::ScopeGuard;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::{Notify, broadcast};

/// Lifecycle scope of one screen.
///
/// Closing the scope tells every fetch bound to it to stop waiting on the
/// network. The scope also counts tasks still in flight so the interactive
/// executor can tell when a screen has settled.
#[derive(Clone)]
pub struct ScreenScope {
    inner: Arc<ScopeInner>,
}

struct ScopeInner {
    closed_tx: broadcast::Sender<()>,
    closed: AtomicBool,
    in_flight: AtomicUsize,
    idle: Notify,
}

impl ScreenScope {
    pub fn new() -> Self {
        let (closed_tx, _) = broadcast::channel(1);
        Self {
            inner: Arc::new(ScopeInner {
                closed_tx,
                closed: AtomicBool::new(false),
                in_flight: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        }
    }

    /// Get a receiver for close notifications
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.inner.closed_tx.subscribe()
    }

    /// Close the scope (screen teardown). Idempotent.
    pub fn close(&self) {
        if !self.inner.closed.swap(true, Ordering::SeqCst) {
            log::debug!(
                "Screen scope closed with {} task(s) in flight",
                self.in_flight()
            );
            let _ = self.inner.closed_tx.send(());
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Guard a background task waits on to learn about teardown
    pub fn subscribe_guard(&self) -> ScopeGuard {
        ScopeGuard::new(self)
    }

    /// Count one more task in flight until the ticket is dropped
    pub fn track(&self) -> TaskTicket {
        self.inner.in_flight.fetch_add(1, Ordering::SeqCst);
        TaskTicket {
            scope: self.clone(),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Resolves after the in-flight count last dropped to zero
    pub async fn idle(&self) {
        self.inner.idle.notified().await;
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a task counted as in flight for as long as it lives
pub struct TaskTicket {
    scope: ScreenScope,
}

impl Drop for TaskTicket {
    fn drop(&mut self) {
        if self.scope.inner.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.scope.inner.idle.notify_one();
        }
    }
}
