//! # RankSync App
//!
//! Composition root for embedding RankSync in a host.
//!
//! This crate contains:
//! - Command entry points (link, unlink, status, reload)
//! - Application context (dependency injection)
//! - Tracing initialisation and command-execution logging
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - The host supplies its directory, event source, and command actors

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
