//! Prompt text and fixed user-facing messages for contact submissions.

/// Shown when the generated reply is missing from the response.
pub const DEFAULT_ACKNOWLEDGMENT: &str =
    "Thank you for your message! I have received it and will get back to you shortly.";

/// Shown for every failed submission, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to send your message. Please try again later.";

/// Builds the instruction sent to the generative-text service.
///
/// The submitter's name and message are embedded verbatim.
pub fn acknowledgment_prompt(owner_name: &str, sender_name: &str, message: &str) -> String {
    format!(
        "Simulate a response from {owner} to a new message. The message is from a person \
         with the name \"{name}\", and their message is: \"{message}\". Please craft a polite, \
         professional, and friendly acknowledgment that the message has been received and \
         they will respond shortly. The response should be concise.",
        owner = owner_name,
        name = sender_name,
        message = message,
    )
}
