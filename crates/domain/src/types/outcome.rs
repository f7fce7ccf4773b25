//! Result of a single outbound call

use serde::{Deserialize, Serialize};

use crate::constants::{LINKED_MARKER, TRANSPORT_ERROR_PREFIX};
use crate::impl_wire_enum_conversions;

/// Binary classification of one transport call plus the raw response text.
///
/// Every call yields exactly one `Outcome`; there is no partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    succeeded: bool,
    body: String,
}

impl Outcome {
    /// Classify a received HTTP status. Only 200..=299 counts as success.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self { succeeded: (200..300).contains(&status), body: body.into() }
    }

    /// Outcome for a call that never produced a usable response.
    pub fn failed(message: impl std::fmt::Display) -> Self {
        Self { succeeded: false, body: format!("{TRANSPORT_ERROR_PREFIX}{message}") }
    }

    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Link state as reported to the user.
///
/// Transport failures and negative answers collapse into `NotLinked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Linked,
    NotLinked,
}

impl_wire_enum_conversions!(LinkStatus {
    Linked => "linked",
    NotLinked => "not_linked",
});

impl LinkStatus {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        if outcome.succeeded() && outcome.body().contains(LINKED_MARKER) {
            Self::Linked
        } else {
            Self::NotLinked
        }
    }
}
