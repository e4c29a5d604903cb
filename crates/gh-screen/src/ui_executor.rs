use crate::ScreenScope;

use log::{debug, trace};
use tokio::sync::mpsc;

/// Unit of interactive-thread work
pub type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// Cloneable handle background tasks use to post work to the interactive thread
#[derive(Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<UiJob>,
}

impl UiHandle {
    /// Queue `job` to run on the interactive thread.
    ///
    /// Returns false when the executor is gone; the job is dropped unrun.
    pub fn post<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.tx.send(Box::new(job)).is_ok()
    }
}

/// Serial executor standing in for the interactive (UI) thread.
///
/// Every job runs to completion before the next one starts, so jobs never
/// race with each other or with screen teardown performed by the owner.
pub struct UiExecutor {
    rx: mpsc::UnboundedReceiver<UiJob>,
    handle: UiHandle,
}

impl UiExecutor {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            rx,
            handle: UiHandle { tx },
        }
    }

    pub fn handle(&self) -> UiHandle {
        self.handle.clone()
    }

    /// Run every job already queued, without waiting. Returns how many ran.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        if ran > 0 {
            trace!("Drained {} UI jobs", ran);
        }
        ran
    }

    /// Wait for the next job and run it
    pub async fn run_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Run jobs until `scope` has no task in flight and the queue is empty.
    pub async fn run_until_idle(&mut self, scope: &ScreenScope) {
        loop {
            self.drain();
            if scope.in_flight() == 0 {
                debug!("Screen scope idle");
                return;
            }

            tokio::select! {
                job = self.rx.recv() => match job {
                    Some(job) => job(),
                    None => return,
                },
                _ = scope.idle() => {}
            }
        }
    }

    /// Receive the next job without running it
    #[cfg(test)]
    pub(crate) async fn next_job(&mut self) -> Option<UiJob> {
        self.rx.recv().await
    }
}

impl Default for UiExecutor {
    fn default() -> Self {
        Self::new()
    }
}
