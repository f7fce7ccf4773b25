//! In-process [`EventSource`]
//!
//! Hosts call [`LocalEventBus::publish`] from whatever thread observed the
//! event. Handlers run inline on that thread, so they must return quickly;
//! the relay adapters only schedule work and return.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use ranksync_core::{EventHandler, EventSource};
use ranksync_domain::{HostEvent, HostEventKind};
use tracing::trace;

#[derive(Default)]
pub struct LocalEventBus {
    handlers: RwLock<HashMap<HostEventKind, Vec<Arc<dyn EventHandler>>>>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every handler subscribed to its kind. Returns the
    /// number of handlers invoked.
    pub fn publish(&self, event: &HostEvent) -> usize {
        let kind = event.kind();
        // Clone out so handlers may subscribe without deadlocking.
        let handlers = self.handlers.read().get(&kind).cloned().unwrap_or_default();

        if handlers.is_empty() {
            trace!(%kind, "no subscribers for host event");
        }
        for handler in &handlers {
            handler.handle(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, kind: HostEventKind) -> usize {
        self.handlers.read().get(&kind).map_or(0, Vec::len)
    }
}

impl EventSource for LocalEventBus {
    fn subscribe(&self, kind: HostEventKind, handler: Arc<dyn EventHandler>) {
        self.handlers.write().entry(kind).or_default().push(handler);
    }
}
