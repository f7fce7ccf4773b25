//! # RankSync Domain
//!
//! Business domain types and models for RankSync.
//!
//! This crate contains:
//! - The sync payload and its event kinds
//! - Transport outcomes and link status
//! - Directory snapshots and host events
//! - Configuration structures and message templates
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other RankSync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
