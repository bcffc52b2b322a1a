//! Request Handles - Cooperative cancellation for in-flight transport calls

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cancel capability for one in-flight transport call.
///
/// The transport layer creates a handle when a request starts and
/// registers it in the per-property state; the coordinator aborts it
/// when a newer query for the same relationship supersedes the request.
/// Clones share the same underlying flag.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    aborted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl AbortHandle {
    /// Create a new, un-aborted handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Idempotent.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Check whether the handle has been aborted
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Resolve once the handle is aborted.
    ///
    /// The transport side races this against its own completion to turn
    /// a supersede into an `Aborted` failure.
    pub async fn aborted(&self) {
        loop {
            // Register interest before checking, so an abort between the
            // check and the await is not missed.
            let notified = self.notify.notified();
            if self.is_aborted() {
                return;
            }
            notified.await;
        }
    }
}
