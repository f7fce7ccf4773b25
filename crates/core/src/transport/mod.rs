//! Non-blocking access to the sync transport
//!
//! [`SyncRelay`] schedules every transport call onto the tokio runtime and
//! hands back an [`OutcomeHandle`]. The calling thread only pays for the
//! spawn, so host dispatch threads never wait on network I/O.

pub mod ports;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use ranksync_domain::{Outcome, Payload, RankSyncError, Result};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::error;
use uuid::Uuid;

pub use self::ports::SyncTransport;

/// Pending result of a scheduled transport call.
///
/// Resolves to a failed [`Outcome`] if the task panicked or was cancelled, so
/// awaiting it never surfaces a fault.
#[derive(Debug)]
pub struct OutcomeHandle {
    operation: &'static str,
    inner: JoinHandle<Outcome>,
}

impl OutcomeHandle {
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Future for OutcomeHandle {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let operation = self.operation;
        Pin::new(&mut self.inner).poll(cx).map(|joined| {
            joined.unwrap_or_else(|err| {
                error!(operation, error = %err, "transport task did not complete");
                Outcome::failed(format!("{operation} task aborted: {err}"))
            })
        })
    }
}

/// Run `future` on `runtime` and track it as an [`OutcomeHandle`].
pub fn spawn_outcome<F>(runtime: &Handle, operation: &'static str, future: F) -> OutcomeHandle
where
    F: Future<Output = Outcome> + Send + 'static,
{
    OutcomeHandle { operation, inner: runtime.spawn(future) }
}

/// Transport client as seen by adapters and workflows.
///
/// Cloning is cheap; every clone shares the same transport and runtime.
#[derive(Clone)]
pub struct SyncRelay {
    transport: Arc<dyn SyncTransport>,
    runtime: Handle,
}

impl SyncRelay {
    pub fn new(transport: Arc<dyn SyncTransport>, runtime: Handle) -> Self {
        Self { transport, runtime }
    }

    /// Bind to the runtime the caller is currently running on.
    ///
    /// # Errors
    /// Returns `RankSyncError::Internal` when called outside a tokio runtime.
    pub fn from_current(transport: Arc<dyn SyncTransport>) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| RankSyncError::Internal(format!("no tokio runtime available: {e}")))?;
        Ok(Self::new(transport, runtime))
    }

    pub const fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn notify_join(&self, payload: Payload) -> OutcomeHandle {
        let transport = Arc::clone(&self.transport);
        spawn_outcome(&self.runtime, "notify_join", async move {
            transport.notify_join(&payload).await
        })
    }

    pub fn notify_rank_change(&self, payload: Payload) -> OutcomeHandle {
        let transport = Arc::clone(&self.transport);
        spawn_outcome(&self.runtime, "notify_rank_change", async move {
            transport.notify_rank_change(&payload).await
        })
    }

    pub fn link(&self, identity: Uuid, display_name: String, code: String) -> OutcomeHandle {
        let transport = Arc::clone(&self.transport);
        spawn_outcome(&self.runtime, "link", async move {
            transport.link(identity, &display_name, &code).await
        })
    }

    pub fn unlink(&self, identity: Uuid) -> OutcomeHandle {
        let transport = Arc::clone(&self.transport);
        spawn_outcome(&self.runtime, "unlink", async move { transport.unlink(identity).await })
    }

    pub fn check_linked(&self, identity: Uuid) -> OutcomeHandle {
        let transport = Arc::clone(&self.transport);
        spawn_outcome(&self.runtime, "check_linked", async move {
            transport.check_linked(identity).await
        })
    }
}
