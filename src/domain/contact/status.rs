//! SubmissionStatus enum for the contact form lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a contact submission.
///
/// `Succeeded` and `Failed` are resting states; the next submit re-enters
/// `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Returns true while a request is in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Succeeded, Submitting)
                | (Failed, Submitting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle | Succeeded | Failed => vec![Submitting],
            Submitting => vec![Succeeded, Failed],
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionStatus::Idle => "Idle",
            SubmissionStatus::Submitting => "Submitting",
            SubmissionStatus::Succeeded => "Succeeded",
            SubmissionStatus::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}
