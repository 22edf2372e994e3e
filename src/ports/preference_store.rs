//! Preference Store Port - key-value persistence for visitor preferences.

use async_trait::async_trait;

/// Errors that can occur during preference storage operations
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Failed to serialize preferences: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize preferences: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for reading and writing string preferences by key.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Stores a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
