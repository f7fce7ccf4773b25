//! Account linking: link, unlink, and status commands

pub mod ports;
pub mod service;

pub use ports::CommandActor;
pub use service::{Invocation, LinkingWorkflow, WorkflowState};
