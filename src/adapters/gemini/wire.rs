//! Gemini `generateContent` wire types.
//!
//! Response fields are all optional so that any partial body still
//! deserializes; a missing segment simply yields no reply text.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn carrying `prompt`.
    pub fn single_turn(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: Some(vec![Part {
                    text: Some(prompt.into()),
                }]),
            }],
        }
    }
}

/// One conversational turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if every segment is present
    /// and the text is non-empty.
    pub fn reply_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()
            .and_then(<[Candidate]>::first)
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.as_deref())
            .and_then(<[Part]>::first)
            .and_then(|part| part.text.as_deref())
            .filter(|text| !text.is_empty())
    }
}

/// Pulls the reply text out of an arbitrary JSON body.
///
/// Bodies that do not fit the response shape at all yield `None`.
pub fn extract_reply(body: &serde_json::Value) -> Option<String> {
    GenerateContentResponse::deserialize(body)
        .ok()
        .and_then(|response| response.reply_text().map(str::to_owned))
}
