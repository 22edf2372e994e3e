//! SubmitContactHandler - Runs one contact form submission end to end.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::contact::{ContactError, ContactForm, SubmissionState};
use crate::ports::{InvokeError, ReplyGenerator};

/// Why no reply arrived.
#[derive(Debug, thiserror::Error)]
enum ReplyFailure {
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[error("no reply within {}ms", .0.as_millis())]
    DeadlineExceeded(Duration),
}

/// Handler for contact form submissions.
///
/// This is the error boundary of a submission: once the form has entered
/// `Submitting`, every failure becomes the generic failure message and the
/// call still returns `Ok`.
pub struct SubmitContactHandler {
    generator: Arc<dyn ReplyGenerator>,
    owner_name: String,
    deadline: Option<Duration>,
}

impl SubmitContactHandler {
    pub fn new(generator: Arc<dyn ReplyGenerator>, owner_name: impl Into<String>) -> Self {
        Self {
            generator,
            owner_name: owner_name.into(),
            deadline: None,
        }
    }

    /// Caps the wait for a reply; a reply still pending at `deadline`
    /// counts as a failed submission.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Submits the form and returns the resulting feedback.
    ///
    /// # Errors
    ///
    /// Only precondition failures: a required field is empty, or the form
    /// is already submitting. No request is made in either case.
    pub async fn handle(&self, form: &mut ContactForm) -> Result<SubmissionState, ContactError> {
        let submission_id = Uuid::new_v4();

        let prompt = form.begin_submission(&self.owner_name).map_err(|e| {
            tracing::info!(%submission_id, error = %e, "Contact submission rejected");
            e
        })?;

        tracing::info!(
            %submission_id,
            message_len = form.data().message.len(),
            "Contact submission started"
        );

        match self.generate(&prompt).await {
            Ok(reply) => {
                let fallback = reply.is_none();
                form.complete_success(reply)?;
                tracing::info!(%submission_id, fallback, "Contact submission succeeded");
            }
            Err(e) => {
                form.complete_failure()?;
                tracing::error!(%submission_id, error = %e, "Contact submission failed");
            }
        }

        Ok(form.state())
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>, ReplyFailure> {
        let reply = self.generator.generate_reply(prompt);
        match self.deadline {
            Some(limit) => tokio::time::timeout(limit, reply)
                .await
                .map_err(|_| ReplyFailure::DeadlineExceeded(limit))?
                .map_err(ReplyFailure::from),
            None => Ok(reply.await?),
        }
    }
}
