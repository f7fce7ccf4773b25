//! Port interface for the outbound sync transport
//!
//! Implementations talk to the remote service. They must resolve every call
//! to an [`Outcome`]: connection errors, timeouts, and serialization failures
//! are folded into `Outcome::failed` instead of being returned as errors.

use async_trait::async_trait;
use ranksync_domain::{Outcome, Payload};
use uuid::Uuid;

/// Trait for delivering sync events and link commands to the remote service
#[async_trait]
pub trait SyncTransport: Send + Sync {
    /// Announce a user session start.
    async fn notify_join(&self, payload: &Payload) -> Outcome;

    /// Announce a role grant or revocation.
    async fn notify_rank_change(&self, payload: &Payload) -> Outcome;

    /// Redeem a one-time link code for `identity`.
    async fn link(&self, identity: Uuid, display_name: &str, code: &str) -> Outcome;

    /// Remove the link held by `identity`.
    async fn unlink(&self, identity: Uuid) -> Outcome;

    /// Query the remote link state of `identity`.
    async fn check_linked(&self, identity: Uuid) -> Outcome;
}
