//! Contact domain module.
//!
//! The contact form and its submission lifecycle:
//! `Idle → Submitting → {Succeeded, Failed} → Submitting → ...`.
//! Talking to the generative-text service is left to the application layer.

mod aggregate;
mod errors;
mod form;
mod prompt;
mod status;

pub use aggregate::{ContactForm, SubmissionState};
pub use errors::ContactError;
pub use form::{FormData, FormField};
pub use prompt::{acknowledgment_prompt, DEFAULT_ACKNOWLEDGMENT, FAILURE_MESSAGE};
pub use status::SubmissionStatus;
