//! # RankSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the transport, directory, host
//!   events, command actors, and configuration
//! - Directory event adapters (join, role grant, role revoke)
//! - The account linking workflow
//!
//! ## Architecture Principles
//! - Only depends on `ranksync-domain`
//! - No HTTP, file system, or host code
//! - All external dependencies via traits
//! - Network calls are scheduled on the tokio runtime, never awaited on the
//!   caller's thread

pub mod linking;
pub mod relay;
pub mod transport;

// Infrastructure ports
pub mod config_ports;
pub mod directory_ports;

#[cfg(test)]
pub(crate) mod test_support;

pub use config_ports::ConfigStore;
pub use directory_ports::{DirectoryService, EventHandler, EventSource};
pub use linking::{CommandActor, Invocation, LinkingWorkflow, WorkflowState};
pub use relay::{register_adapters, JoinAdapter, RoleChangeAdapter};
pub use transport::{spawn_outcome, OutcomeHandle, SyncRelay, SyncTransport};
