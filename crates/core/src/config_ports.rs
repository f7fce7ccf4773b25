//! Configuration store port.
//!
//! Configuration is read fresh on every call so that a reload takes effect
//! for the next operation without restarting anything. A call keeps the
//! snapshot it started with even if a reload lands mid-flight.
//!
//! # Example
//!
//! ```no_run
//! use ranksync_core::ConfigStore;
//!
//! fn join_sync_enabled(store: &dyn ConfigStore) -> bool {
//!     store.snapshot().sync.on_join
//! }
//! ```

use std::sync::Arc;

use ranksync_domain::{Config, Result};

/// Shared, externally mutable configuration source.
pub trait ConfigStore: Send + Sync {
    /// Current configuration. Cheap; safe to call from any thread.
    fn snapshot(&self) -> Arc<Config>;

    /// Re-read the backing source and publish the result.
    ///
    /// On error the previous configuration stays active.
    fn reload(&self) -> Result<()>;
}
