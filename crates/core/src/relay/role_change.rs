//! Role grant / revoke adapter

use std::sync::Arc;

use ranksync_domain::{EventKind, HostEvent, MutationTarget, NodeMutation, Outcome, Payload};
use tokio::task::JoinHandle;
use tracing::debug;

use super::report_delivery;
use crate::config_ports::ConfigStore;
use crate::directory_ports::EventHandler;
use crate::transport::SyncRelay;

/// Relays role-membership changes on users.
///
/// One instance handles a single direction: [`RoleChangeAdapter::grant`]
/// reacts to added nodes, [`RoleChangeAdapter::revoke`] to removed ones.
pub struct RoleChangeAdapter {
    relay: SyncRelay,
    config: Arc<dyn ConfigStore>,
    kind: EventKind,
}

impl RoleChangeAdapter {
    pub fn grant(relay: SyncRelay, config: Arc<dyn ConfigStore>) -> Self {
        Self { relay, config, kind: EventKind::GroupAdd }
    }

    pub fn revoke(relay: SyncRelay, config: Arc<dyn ConfigStore>) -> Self {
        Self { relay, config, kind: EventKind::GroupRemove }
    }

    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Build the payload from the mutation's snapshot and schedule delivery.
    ///
    /// Returns `None` when rank sync is disabled, the target is not a user,
    /// or the node is not a role-membership edge.
    pub fn dispatch(&self, mutation: &NodeMutation) -> Option<JoinHandle<Outcome>> {
        if !self.config.snapshot().sync.on_rank_change {
            return None;
        }

        let MutationTarget::User(user) = &mutation.target else {
            return None;
        };
        let group = mutation.node.group_name()?;

        let player = user.display_name().to_owned();
        debug!(player = %player, group, event_type = %self.kind, "role membership changed");

        // Snapshot is captured now, not when the task runs.
        let payload = Payload::new(
            user.identity,
            player.clone(),
            user.primary_group.clone(),
            user.groups(),
            self.kind,
        );

        let kind = self.kind;
        let delivery = self.relay.notify_rank_change(payload);
        Some(self.relay.runtime().spawn(async move {
            let outcome = delivery.await;
            report_delivery(kind, &player, &outcome);
            outcome
        }))
    }
}

impl EventHandler for RoleChangeAdapter {
    fn handle(&self, event: &HostEvent) {
        let mutation = match (self.kind, event) {
            (EventKind::GroupAdd, HostEvent::NodeAdded(mutation))
            | (EventKind::GroupRemove, HostEvent::NodeRemoved(mutation)) => mutation,
            _ => return,
        };
        drop(self.dispatch(mutation));
    }
}
