//! Ports for the role-membership directory and the host event bus.
//!
//! The directory is the system of record for roles; RankSync only reads
//! snapshots from it and subscribes to its mutation events. Event delivery
//! happens on host threads, so handlers must return without awaiting I/O.

use std::sync::Arc;

use async_trait::async_trait;
use ranksync_domain::{HostEvent, HostEventKind, Result, UserSnapshot};
use uuid::Uuid;

/// Trait for looking up user snapshots in the directory
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Load the current snapshot for `identity`.
    ///
    /// The lookup may be remote. `Ok(None)` means the user is unknown.
    async fn load_user(&self, identity: Uuid) -> Result<Option<UserSnapshot>>;
}

/// Receiver of host events.
pub trait EventHandler: Send + Sync {
    /// Called on the host's dispatch thread. Must not block.
    fn handle(&self, event: &HostEvent);
}

/// Anything that can deliver host events to subscribers.
pub trait EventSource: Send + Sync {
    /// Register `handler` for every event of `kind`.
    fn subscribe(&self, kind: HostEventKind, handler: Arc<dyn EventHandler>);
}
