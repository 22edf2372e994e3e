//! Contact-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Reasons a submission is refused before any request is made.
///
/// Once a submission is in flight nothing is reported through this type;
/// failures become the generic failure message on the form instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required field was empty.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A submission from this form is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// Outcome recorded without a matching submission.
    #[error("invalid state transition: {0}")]
    InvalidTransition(String),
}

impl ContactError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ContactError::Validation(err) => ErrorCode::from(err),
            ContactError::AlreadySubmitting => ErrorCode::SubmissionInProgress,
            ContactError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }
}
