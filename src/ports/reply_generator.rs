//! Reply Generator Port - produce an acknowledgment for a contact message.
//!
//! Abstracts the generative-text service so the submission workflow does not
//! depend on any provider's wire format.

use async_trait::async_trait;

use super::json_invoker::InvokeError;

/// Port for generating a reply text from a prompt.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Sends the prompt and returns the reply text.
    ///
    /// `Ok(None)` means the service answered but the reply could not be
    /// found in its response; callers substitute their own default.
    async fn generate_reply(&self, prompt: &str) -> Result<Option<String>, InvokeError>;
}
