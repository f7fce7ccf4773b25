//! `link`, `unlink`, and `status` sub-commands

use std::sync::Arc;
use std::time::Instant;

use ranksync_core::{CommandActor, Invocation, WorkflowState};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Redeem a link code for the acting player.
pub fn link(ctx: &AppContext, actor: Arc<dyn CommandActor>, code: Option<&str>) -> Invocation {
    let start = Instant::now();
    track(ctx, "ranksync::link", start, ctx.linking.link(actor, code))
}

pub fn unlink(ctx: &AppContext, actor: Arc<dyn CommandActor>) -> Invocation {
    let start = Instant::now();
    track(ctx, "ranksync::unlink", start, ctx.linking.unlink(actor))
}

pub fn status(ctx: &AppContext, actor: Arc<dyn CommandActor>) -> Invocation {
    let start = Instant::now();
    track(ctx, "ranksync::status", start, ctx.linking.status(actor))
}

/// Log the command once its final state is known.
fn track(
    ctx: &AppContext,
    command: &'static str,
    start: Instant,
    invocation: Invocation,
) -> Invocation {
    match invocation {
        Invocation::Rejected => {
            log_command_execution(command, start.elapsed(), false);
            Invocation::Rejected
        }
        Invocation::Pending(pending) => Invocation::Pending(ctx.relay.runtime().spawn(async move {
            let state = pending.await.unwrap_or(WorkflowState::Failed);
            log_command_execution(command, start.elapsed(), state == WorkflowState::Succeeded);
            state
        })),
    }
}
