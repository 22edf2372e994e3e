//! Contact form aggregate.
//!
//! One `ContactForm` backs one form on screen. It owns the typed-in values
//! and the feedback shown after each submission.
//!
//! # Invariants
//!
//! - `is_submitting` is true exactly while status is `Submitting`
//! - `is_error` is true iff the last outcome was a failure
//! - Form values are cleared only by a successful submission
//! - A second submission is refused while one is in flight

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::errors::ContactError;
use super::form::{FormData, FormField};
use super::prompt::{acknowledgment_prompt, DEFAULT_ACKNOWLEDGMENT, FAILURE_MESSAGE};
use super::status::SubmissionStatus;

/// UI feedback for the most recent submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionState {
    pub is_submitting: bool,
    /// Last outcome text; empty before the first submission.
    pub message: String,
    pub is_error: bool,
}

/// Contact form aggregate.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    form: FormData,
    status: SubmissionStatus,
    message: String,
}

impl ContactForm {
    /// Creates an empty form in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled with values, as if typed by the user.
    pub fn with_data(form: FormData) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn data(&self) -> &FormData {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns the feedback view of this form.
    pub fn state(&self) -> SubmissionState {
        SubmissionState {
            is_submitting: self.status.is_in_flight(),
            message: self.message.clone(),
            is_error: self.status == SubmissionStatus::Failed,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies an input change event.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a submission and returns the prompt to send.
    ///
    /// Feedback from the previous submission is cleared.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitting` if a submission is in flight
    /// - `Validation` if a required field is empty; nothing changes
    pub fn begin_submission(&mut self, owner_name: &str) -> Result<String, ContactError> {
        if self.status.is_in_flight() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.form.validate()?;

        self.status = self.transition(SubmissionStatus::Submitting)?;
        self.message.clear();

        Ok(acknowledgment_prompt(
            owner_name,
            &self.form.name,
            &self.form.message,
        ))
    }

    /// Records a successful reply and clears the form.
    ///
    /// A missing or empty reply falls back to the default acknowledgment.
    pub fn complete_success(&mut self, reply: Option<String>) -> Result<(), ContactError> {
        self.status = self.transition(SubmissionStatus::Succeeded)?;
        self.message = reply
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACKNOWLEDGMENT.to_string());
        self.form.reset();
        Ok(())
    }

    /// Records a failed submission. The form keeps its values for a retry.
    pub fn complete_failure(&mut self) -> Result<(), ContactError> {
        self.status = self.transition(SubmissionStatus::Failed)?;
        self.message = FAILURE_MESSAGE.to_string();
        Ok(())
    }

    fn transition(&self, target: SubmissionStatus) -> Result<SubmissionStatus, ContactError> {
        self.status
            .transition_to(target)
            .map_err(|e| ContactError::InvalidTransition(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm::with_data(FormData::new("Alice", "a@x.com", "", "Hi"))
    }

    #[test]
    fn new_form_is_idle_with_empty_feedback() {
        let form = ContactForm::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.state(), SubmissionState::default());
        assert!(form.data().is_empty());
    }

    #[test]
    fn update_field_edits_form_data() {
        let mut form = ContactForm::new();
        form.update_field(FormField::Name, "Bob");
        assert_eq!(form.data().name, "Bob");
    }

    #[test]
    fn begin_submission_enters_submitting_and_returns_prompt() {
        let mut form = filled_form();
        let prompt = form.begin_submission("Sam").unwrap();

        assert!(prompt.contains("\"Alice\""));
        assert!(prompt.contains("\"Hi\""));
        let state = form.state();
        assert!(state.is_submitting);
        assert!(!state.is_error);
        assert!(state.message.is_empty());
    }

    #[test]
    fn begin_submission_rejects_empty_message_without_state_change() {
        let mut form = ContactForm::with_data(FormData::new("Alice", "a@x.com", "", ""));

        let err = form.begin_submission("Sam").unwrap_err();

        assert!(matches!(err, ContactError::Validation(_)));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn begin_submission_rejects_reentry_while_in_flight() {
        let mut form = filled_form();
        form.begin_submission("Sam").unwrap();

        assert_eq!(
            form.begin_submission("Sam").unwrap_err(),
            ContactError::AlreadySubmitting
        );
        assert!(form.state().is_submitting);
    }

    #[test]
    fn complete_success_uses_reply_and_resets_form() {
        let mut form = filled_form();
        form.begin_submission("Sam").unwrap();
        form.complete_success(Some("Thanks Alice!".to_string())).unwrap();

        let state = form.state();
        assert_eq!(state.message, "Thanks Alice!");
        assert!(!state.is_error);
        assert!(!state.is_submitting);
        assert!(form.data().is_empty());
    }

    #[test]
    fn complete_success_without_reply_uses_default() {
        let mut form = filled_form();
        form.begin_submission("Sam").unwrap();
        form.complete_success(None).unwrap();

        assert_eq!(form.state().message, DEFAULT_ACKNOWLEDGMENT);
    }

    #[test]
    fn complete_success_with_blank_reply_uses_default() {
        let mut form = filled_form();
        form.begin_submission("Sam").unwrap();
        form.complete_success(Some("  ".to_string())).unwrap();

        assert_eq!(form.state().message, DEFAULT_ACKNOWLEDGMENT);
    }

    #[test]
    fn complete_failure_sets_error_and_keeps_form() {
        let mut form = filled_form();
        form.begin_submission("Sam").unwrap();
        form.complete_failure().unwrap();

        let state = form.state();
        assert_eq!(state.message, FAILURE_MESSAGE);
        assert!(state.is_error);
        assert!(!state.is_submitting);
        assert_eq!(form.data().name, "Alice");
        assert_eq!(form.data().message, "Hi");
    }

    #[test]
    fn resubmitting_after_failure_clears_error() {
        let mut form = filled_form();
        form.begin_submission("Sam").unwrap();
        form.complete_failure().unwrap();

        form.begin_submission("Sam").unwrap();

        let state = form.state();
        assert!(!state.is_error);
        assert!(state.message.is_empty());
    }

    #[test]
    fn outcome_without_submission_is_rejected() {
        let mut form = filled_form();
        assert!(matches!(
            form.complete_success(None),
            Err(ContactError::InvalidTransition(_))
        ));
        assert!(form.complete_failure().is_err());
    }

    #[test]
    fn submission_state_serializes_camel_case() {
        let state = SubmissionState {
            is_submitting: false,
            message: "ok".to_string(),
            is_error: true,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["isSubmitting"], false);
        assert_eq!(json["isError"], true);
        assert_eq!(json["message"], "ok");
    }
}
