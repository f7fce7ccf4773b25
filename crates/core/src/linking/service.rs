//! Account linking workflow - core business logic
//!
//! The remote service owns link state. Each invocation walks
//! `Invoked -> AwaitingResponse -> Succeeded | Failed` and reports the end
//! state to the actor with one of two fixed messages.

use std::sync::Arc;

use ranksync_domain::constants::{LINK_USAGE, PERMISSION_LINK, PERMISSION_STATUS, PLAYERS_ONLY};
use ranksync_domain::{impl_wire_enum_conversions, LinkStatus, MessageKey, Outcome};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use super::ports::CommandActor;
use crate::config_ports::ConfigStore;
use crate::transport::{OutcomeHandle, SyncRelay};

/// Lifecycle of a single linking command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Invoked,
    AwaitingResponse,
    Succeeded,
    Failed,
}

impl_wire_enum_conversions!(WorkflowState {
    Invoked => "invoked",
    AwaitingResponse => "awaiting_response",
    Succeeded => "succeeded",
    Failed => "failed",
});

/// What a command invocation turned into.
#[derive(Debug)]
pub enum Invocation {
    /// Refused before any network call; the actor was already told why.
    Rejected,
    /// Waiting on the remote service; resolves once the actor was notified.
    Pending(JoinHandle<WorkflowState>),
}

impl Invocation {
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Wait for the final state.
    pub async fn settle(self) -> WorkflowState {
        match self {
            Self::Rejected => WorkflowState::Failed,
            Self::Pending(handle) => handle.await.unwrap_or(WorkflowState::Failed),
        }
    }
}

/// Link, unlink, and status commands.
pub struct LinkingWorkflow {
    relay: SyncRelay,
    config: Arc<dyn ConfigStore>,
}

impl LinkingWorkflow {
    pub fn new(relay: SyncRelay, config: Arc<dyn ConfigStore>) -> Self {
        Self { relay, config }
    }

    /// Redeem `code` for the acting player.
    pub fn link(&self, actor: Arc<dyn CommandActor>, code: Option<&str>) -> Invocation {
        let Some(identity) = self.authorize(actor.as_ref(), PERMISSION_LINK) else {
            return Invocation::Rejected;
        };

        let code = code.unwrap_or_default();
        if code.trim().is_empty() {
            actor.send_message(LINK_USAGE);
            return Invocation::Rejected;
        }

        let pending = self.relay.link(identity, actor.display_name(), code.to_owned());
        self.await_reply(actor, pending, "link", |outcome| {
            if outcome.succeeded() {
                (WorkflowState::Succeeded, MessageKey::LinkSuccess)
            } else {
                (WorkflowState::Failed, MessageKey::LinkFail)
            }
        })
    }

    pub fn unlink(&self, actor: Arc<dyn CommandActor>) -> Invocation {
        let Some(identity) = self.authorize(actor.as_ref(), PERMISSION_LINK) else {
            return Invocation::Rejected;
        };

        let pending = self.relay.unlink(identity);
        self.await_reply(actor, pending, "unlink", |outcome| {
            if outcome.succeeded() {
                (WorkflowState::Succeeded, MessageKey::UnlinkSuccess)
            } else {
                (WorkflowState::Failed, MessageKey::UnlinkFail)
            }
        })
    }

    /// Ask the remote service whether the actor is linked.
    ///
    /// Any failure reads as "not linked"; there is no unknown state.
    pub fn status(&self, actor: Arc<dyn CommandActor>) -> Invocation {
        let Some(identity) = self.authorize(actor.as_ref(), PERMISSION_STATUS) else {
            return Invocation::Rejected;
        };

        let pending = self.relay.check_linked(identity);
        self.await_reply(actor, pending, "status", |outcome| {
            match LinkStatus::from_outcome(outcome) {
                LinkStatus::Linked => (WorkflowState::Succeeded, MessageKey::StatusLinked),
                LinkStatus::NotLinked => (WorkflowState::Failed, MessageKey::StatusNotLinked),
            }
        })
    }

    /// Player and permission gates shared by every sub-command.
    fn authorize(&self, actor: &dyn CommandActor, permission: &str) -> Option<Uuid> {
        let Some(identity) = actor.identity() else {
            actor.send_message(PLAYERS_ONLY);
            return None;
        };

        if !actor.has_permission(permission) {
            actor.send_message(&self.config.snapshot().messages.render(MessageKey::NoPermission));
            return None;
        }

        debug!(player = %actor.display_name(), state = %WorkflowState::Invoked, "linking command accepted");
        Some(identity)
    }

    fn await_reply<F>(
        &self,
        actor: Arc<dyn CommandActor>,
        pending: OutcomeHandle,
        command: &'static str,
        classify: F,
    ) -> Invocation
    where
        F: FnOnce(&Outcome) -> (WorkflowState, MessageKey) + Send + 'static,
    {
        let config = Arc::clone(&self.config);
        debug!(command, state = %WorkflowState::AwaitingResponse, "waiting on remote service");

        Invocation::Pending(self.relay.runtime().spawn(async move {
            let outcome = pending.await;
            let (state, key) = classify(&outcome);
            debug!(command, %state, body = outcome.body(), "linking command finished");
            actor.send_message(&config.snapshot().messages.render(key));
            state
        }))
    }
}
