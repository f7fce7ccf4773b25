//! Directory event adapters.
//!
//! Each adapter turns one kind of host event into a [`Payload`] and hands
//! it to the [`SyncRelay`]. The triggering event completes immediately; the
//! delivery result only ever reaches the log.
//!
//! [`Payload`]: ranksync_domain::Payload

pub mod join;
pub mod role_change;

use std::sync::Arc;

use ranksync_domain::{EventKind, HostEventKind, Outcome};
use tracing::{debug, info, warn};

pub use self::join::JoinAdapter;
pub use self::role_change::RoleChangeAdapter;
use crate::config_ports::ConfigStore;
use crate::directory_ports::{DirectoryService, EventSource};
use crate::transport::SyncRelay;

/// Subscribe the arrival, grant, and revoke adapters to `source`.
pub fn register_adapters(
    source: &dyn EventSource,
    relay: &SyncRelay,
    directory: Arc<dyn DirectoryService>,
    config: Arc<dyn ConfigStore>,
) {
    source.subscribe(
        HostEventKind::SessionStart,
        Arc::new(JoinAdapter::new(relay.clone(), directory, Arc::clone(&config))),
    );
    source.subscribe(
        HostEventKind::RoleAdd,
        Arc::new(RoleChangeAdapter::grant(relay.clone(), Arc::clone(&config))),
    );
    source.subscribe(
        HostEventKind::RoleRemove,
        Arc::new(RoleChangeAdapter::revoke(relay.clone(), config)),
    );

    info!("directory event adapters registered");
}

/// Log the final result of a fire-and-forget delivery.
fn report_delivery(kind: EventKind, player: &str, outcome: &Outcome) {
    if outcome.succeeded() {
        debug!(event_type = %kind, player, "sync event delivered");
    } else {
        warn!(event_type = %kind, player, body = outcome.body(), "failed to deliver sync event");
    }
}
