//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Remote API paths
pub const PATH_PLAYER_JOIN: &str = "/api/player-join";
pub const PATH_RANK_UPDATE: &str = "/api/rank-update";
pub const PATH_LINK: &str = "/api/link";
pub const PATH_UNLINK: &str = "/api/unlink";
pub const PATH_LINKED_PREFIX: &str = "/api/linked/";

// Configuration defaults
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3000";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 5000;

/// Display name used when the directory has no username for a user.
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown";

/// Marker a successful status response must contain to count as linked.
pub const LINKED_MARKER: &str = "\"linked\":true";

/// Prefix of the synthesized body when a transport call fails outright.
pub const TRANSPORT_ERROR_PREFIX: &str = "Error: ";

// Permission nodes checked by the command surface
pub const PERMISSION_LINK: &str = "ranksync.link";
pub const PERMISSION_STATUS: &str = "ranksync.status";
pub const PERMISSION_ADMIN: &str = "ranksync.admin";

pub const LINK_USAGE: &str = "Usage: /ranksync link <code>";
pub const PLAYERS_ONLY: &str = "This command can only be used by players.";
