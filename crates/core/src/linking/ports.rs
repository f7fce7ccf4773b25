//! Port interface for the command-dispatch surface

use uuid::Uuid;

/// Whoever invoked a command: a player, or a non-player sender such as the
/// server console.
pub trait CommandActor: Send + Sync {
    /// Directory identity, or `None` for non-player senders.
    fn identity(&self) -> Option<Uuid>;

    fn display_name(&self) -> String;

    fn has_permission(&self, permission: &str) -> bool;

    /// Deliver a chat message to the actor. May be called from any thread.
    fn send_message(&self, message: &str);
}
