//! Gemini adapter - reply generation via the `generateContent` API.

mod reply_generator;
mod wire;

pub use reply_generator::{GeminiConfig, GeminiReplyGenerator};
pub use wire::{extract_reply, Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
