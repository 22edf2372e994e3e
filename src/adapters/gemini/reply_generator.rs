//! Gemini Reply Generator - ReplyGenerator over Gemini's `generateContent`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash-preview-05-20");
//!
//! let generator = GeminiReplyGenerator::new(config, Arc::new(invoker));
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

use crate::config::AiConfig;
use crate::ports::{InvokeError, JsonInvoker, OutboundRequest, ReplyGenerator};

use super::wire::{extract_reply, GenerateContentRequest};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for the Gemini generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication; may be empty.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash-preview-05-20".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl From<&AiConfig> for GeminiConfig {
    fn from(config: &AiConfig) -> Self {
        Self::new(config.api_key().unwrap_or_default())
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
    }
}

/// Reply generator backed by Gemini.
pub struct GeminiReplyGenerator {
    config: GeminiConfig,
    invoker: Arc<dyn JsonInvoker>,
}

impl GeminiReplyGenerator {
    pub fn new(config: GeminiConfig, invoker: Arc<dyn JsonInvoker>) -> Self {
        Self { config, invoker }
    }

    /// Builds the `generateContent` endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, prompt: &str) -> Result<OutboundRequest, InvokeError> {
        let payload = serde_json::to_value(GenerateContentRequest::single_turn(prompt))
            .map_err(|e| InvokeError::Encoding(e.to_string()))?;

        let request = OutboundRequest::post_json(self.generate_url(), payload);

        // Without a key the request goes out bare and the API rejects it.
        Ok(match self.config.api_key() {
            "" => request,
            key => request.with_header(API_KEY_HEADER, key),
        })
    }
}

#[async_trait]
impl ReplyGenerator for GeminiReplyGenerator {
    async fn generate_reply(&self, prompt: &str) -> Result<Option<String>, InvokeError> {
        let request = self.build_request(prompt)?;
        let body = self.invoker.invoke(&request).await?;

        let reply = extract_reply(&body);
        if reply.is_none() {
            tracing::debug!(model = %self.config.model, "Reply text missing from response");
        }
        Ok(reply)
    }
}
