//! `reload` sub-command

use std::time::Instant;

use ranksync_core::CommandActor;
use ranksync_domain::constants::PERMISSION_ADMIN;
use ranksync_domain::MessageKey;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Re-read configuration from its source.
///
/// Available to any sender holding `ranksync.admin`, including the console.
/// Returns whether the reload took effect.
pub fn reload(ctx: &AppContext, actor: &dyn CommandActor) -> bool {
    let start = Instant::now();

    if !actor.has_permission(PERMISSION_ADMIN) {
        actor.send_message(&ctx.config.snapshot().messages.render(MessageKey::NoPermission));
        log_command_execution("ranksync::reload", start.elapsed(), false);
        return false;
    }

    let reloaded = match ctx.config.reload() {
        Ok(()) => {
            info!(sender = %actor.display_name(), "configuration reloaded");
            if let Err(err) = ctx.log_filter.apply(&ctx.config.snapshot().logging) {
                warn!(error = %err, error_type = error_label(&err), "log filter not updated");
            }
            true
        }
        Err(err) => {
            warn!(
                sender = %actor.display_name(),
                error = %err,
                error_type = error_label(&err),
                "failed to reload configuration"
            );
            false
        }
    };

    // Rendered from the post-reload snapshot so a new prefix applies at once.
    let key = if reloaded { MessageKey::ReloadSuccess } else { MessageKey::ReloadFail };
    actor.send_message(&ctx.config.snapshot().messages.render(key));

    log_command_execution("ranksync::reload", start.elapsed(), reloaded);
    reloaded
}
