//! # RankSync Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed sync transport (`HttpSyncClient`)
//! - Configuration loading and hot-reloadable stores
//! - An in-process host event bus
//!
//! ## Architecture
//! - Implements traits defined in `ranksync-core`
//! - Contains all "impure" code (network, file system, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod events;
pub mod http;

// Re-export commonly used items
pub use api::{ApiError, HttpSyncClient};
pub use config::{FileConfigStore, StaticConfigStore};
pub use errors::InfraError;
pub use events::LocalEventBus;
pub use http::{HttpClient, HttpClientBuilder};
