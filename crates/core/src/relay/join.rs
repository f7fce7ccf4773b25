//! Session-start adapter

use std::sync::Arc;

use ranksync_domain::{EventKind, HostEvent, Outcome, Payload, SessionStart};
use tokio::task::JoinHandle;
use tracing::debug;

use super::report_delivery;
use crate::config_ports::ConfigStore;
use crate::directory_ports::{DirectoryService, EventHandler};
use crate::transport::SyncRelay;

/// Sends the user's role set to the remote service when a session begins.
pub struct JoinAdapter {
    relay: SyncRelay,
    directory: Arc<dyn DirectoryService>,
    config: Arc<dyn ConfigStore>,
}

impl JoinAdapter {
    pub fn new(
        relay: SyncRelay,
        directory: Arc<dyn DirectoryService>,
        config: Arc<dyn ConfigStore>,
    ) -> Self {
        Self { relay, directory, config }
    }

    /// Schedule the join notification for `session`.
    ///
    /// Returns `None` when join sync is disabled. The task resolves to `None`
    /// if no directory snapshot could be loaded, in which case nothing is
    /// sent.
    pub fn dispatch(&self, session: &SessionStart) -> Option<JoinHandle<Option<Outcome>>> {
        if !self.config.snapshot().sync.on_join {
            return None;
        }

        let relay = self.relay.clone();
        let directory = Arc::clone(&self.directory);
        let session = session.clone();

        Some(self.relay.runtime().spawn(async move {
            let user = match directory.load_user(session.identity).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    debug!(player = %session.display_name, "could not load directory user");
                    return None;
                }
                Err(err) => {
                    debug!(player = %session.display_name, error = %err, "directory lookup failed");
                    return None;
                }
            };

            let groups = user.groups();
            debug!(player = %session.display_name, ?groups, "sending player join event");

            let payload = Payload::new(
                session.identity,
                session.display_name.clone(),
                user.primary_group,
                groups,
                EventKind::PlayerJoin,
            );

            let outcome = relay.notify_join(payload).await;
            report_delivery(EventKind::PlayerJoin, &session.display_name, &outcome);
            Some(outcome)
        }))
    }
}

impl EventHandler for JoinAdapter {
    fn handle(&self, event: &HostEvent) {
        if let HostEvent::SessionStarted(session) = event {
            // Detached: the session start must not wait on delivery.
            drop(self.dispatch(session));
        }
    }
}
