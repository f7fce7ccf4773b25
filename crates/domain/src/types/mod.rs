//! Domain types and models

pub mod directory;
pub mod link;
pub mod outcome;
pub mod payload;

pub use directory::{
    HostEvent, HostEventKind, MutationTarget, Node, NodeMutation, SessionStart, UserSnapshot,
};
pub use link::{LinkRequest, UnlinkRequest};
pub use outcome::{LinkStatus, Outcome};
pub use payload::{EventKind, Payload};
