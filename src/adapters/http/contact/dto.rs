//! HTTP DTOs for the contact endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::contact::{FormData, SubmissionState};

/// Request to submit the contact form.
///
/// Missing fields read as empty so that the form's own validation reports
/// them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl From<ContactRequest> for FormData {
    fn from(req: ContactRequest) -> Self {
        FormData::new(req.name, req.email, req.subject.unwrap_or_default(), req.message)
    }
}

/// Outcome of a submission.
///
/// On failure the submitted values are echoed back so the page can keep them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(flatten)]
    pub state: SubmissionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<FormData>,
}

impl ContactResponse {
    pub fn new(state: SubmissionState, form: &FormData) -> Self {
        let form = state.is_error.then(|| form.clone());
        Self { state, form }
    }
}
