//! Configuration loading and management
//!
//! This module provides utilities for loading RankSync configuration from
//! files and the environment, and the stores that serve it at runtime.

pub mod loader;
pub mod store;

// Re-export commonly used items
pub use loader::{apply_env_overrides, load, load_from_file, parse_config, probe_config_paths};
pub use store::{FileConfigStore, StaticConfigStore};
