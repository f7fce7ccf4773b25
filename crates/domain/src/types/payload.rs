//! Sync payload sent to the remote service for joins and rank changes

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_wire_enum_conversions;

/// Kind of directory event a payload describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    PlayerJoin,
    GroupAdd,
    GroupRemove,
}

impl_wire_enum_conversions!(EventKind {
    PlayerJoin => "PLAYER_JOIN",
    GroupAdd => "GROUP_ADD",
    GroupRemove => "GROUP_REMOVE",
});

/// Highest `timestamp` handed out so far in this process.
static LAST_CREATED_AT: AtomicI64 = AtomicI64::new(0);

/// Wall-clock milliseconds, clamped so sequential calls never go backwards.
fn next_created_at() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_CREATED_AT.fetch_max(now, Ordering::SeqCst);
    previous.max(now)
}

/// Normalized description of one sync-worthy event.
///
/// Fully populated at construction and never mutated afterwards. The JSON
/// field names are the remote service's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    uuid: Uuid,
    player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    primary_group: Option<String>,
    groups: Vec<String>,
    event_type: EventKind,
    timestamp: i64,
}

impl Payload {
    /// Build a payload stamped with the current time.
    pub fn new(
        identity: Uuid,
        display_name: impl Into<String>,
        primary_role: Option<String>,
        roles: Vec<String>,
        event_kind: EventKind,
    ) -> Self {
        Self {
            uuid: identity,
            player_name: display_name.into(),
            primary_group: primary_role,
            groups: roles,
            event_type: event_kind,
            timestamp: next_created_at(),
        }
    }

    pub const fn identity(&self) -> Uuid {
        self.uuid
    }

    pub fn display_name(&self) -> &str {
        &self.player_name
    }

    pub fn primary_role(&self) -> Option<&str> {
        self.primary_group.as_deref()
    }

    pub fn roles(&self) -> &[String] {
        &self.groups
    }

    pub const fn event_kind(&self) -> EventKind {
        self.event_type
    }

    /// Creation time in milliseconds since the Unix epoch.
    pub const fn created_at(&self) -> i64 {
        self.timestamp
    }
}
