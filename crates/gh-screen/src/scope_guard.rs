use crate::ScreenScope;

use tokio::sync::broadcast;

/// Helper for background tasks that must stop when their screen goes away
pub struct ScopeGuard {
    scope: ScreenScope,
    closed_rx: broadcast::Receiver<()>,
}

impl ScopeGuard {
    pub fn new(scope: &ScreenScope) -> Self {
        Self {
            scope: scope.clone(),
            closed_rx: scope.subscribe(),
        }
    }

    /// Wait for the scope to close.
    ///
    /// Returns immediately if it closed before this guard subscribed.
    pub async fn wait(&mut self) {
        if self.scope.is_closed() {
            return;
        }
        let _ = self.closed_rx.recv().await;
    }

    /// Non-blocking check
    pub fn poll_closed(&mut self) -> bool {
        self.scope.is_closed() || matches!(self.closed_rx.try_recv(), Ok(_))
    }
}
