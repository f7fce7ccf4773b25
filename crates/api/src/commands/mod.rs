//! Command entry points for the host's `/ranksync` command
//!
//! Argument parsing and help text belong to the host; these functions take
//! already-split arguments.

pub mod admin;
pub mod linking;

pub use admin::reload;
pub use linking::{link, status, unlink};
