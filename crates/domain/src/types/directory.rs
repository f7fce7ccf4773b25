//! Directory snapshots and the host events that carry them

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::UNKNOWN_PLAYER_NAME;
use crate::impl_wire_enum_conversions;

/// A single node held by a directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Role membership edge.
    Inheritance { group: String },
    /// Any other permission node.
    Permission { key: String },
}

impl Node {
    pub fn inheritance(group: impl Into<String>) -> Self {
        Self::Inheritance { group: group.into() }
    }

    pub fn permission(key: impl Into<String>) -> Self {
        Self::Permission { key: key.into() }
    }

    /// Group name when this node is a role-membership edge.
    pub fn group_name(&self) -> Option<&str> {
        match self {
            Self::Inheritance { group } => Some(group),
            Self::Permission { .. } => None,
        }
    }
}

/// Point-in-time view of a directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub identity: Uuid,
    pub username: Option<String>,
    pub primary_group: Option<String>,
    pub nodes: Vec<Node>,
}

impl UserSnapshot {
    /// Inheritance group names in node order.
    pub fn groups(&self) -> Vec<String> {
        self.nodes.iter().filter_map(Node::group_name).map(str::to_owned).collect()
    }

    /// Username, or the `Unknown` sentinel when the directory has none.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(UNKNOWN_PLAYER_NAME)
    }
}

/// A user session beginning on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStart {
    pub identity: Uuid,
    pub display_name: String,
}

/// Holder of a mutated node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationTarget {
    /// A user, with the snapshot taken after the mutation was applied.
    User(UserSnapshot),
    /// A group object; never relayed.
    Group(String),
}

/// A node added to or removed from a directory holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMutation {
    pub target: MutationTarget,
    pub node: Node,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    SessionStarted(SessionStart),
    NodeAdded(NodeMutation),
    NodeRemoved(NodeMutation),
}

impl HostEvent {
    pub const fn kind(&self) -> HostEventKind {
        match self {
            Self::SessionStarted(_) => HostEventKind::SessionStart,
            Self::NodeAdded(_) => HostEventKind::RoleAdd,
            Self::NodeRemoved(_) => HostEventKind::RoleRemove,
        }
    }
}

/// Subscription key for [`HostEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    SessionStart,
    RoleAdd,
    RoleRemove,
}

impl_wire_enum_conversions!(HostEventKind {
    SessionStart => "session_start",
    RoleAdd => "role_add",
    RoleRemove => "role_remove",
});
