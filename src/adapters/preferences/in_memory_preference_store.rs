//! In-Memory Preference Store Adapter
//!
//! Keeps preferences in a map for the lifetime of the process.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{PreferenceError, PreferenceStore};

/// In-memory storage for preferences
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored preferences (useful for tests)
    pub async fn clear(&self) {
        self.values.write().await.clear();
    }

    /// Get the number of stored preferences
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_key_is_none() {
        let store = InMemoryPreferenceStore::new();
        assert_eq!(store.get("theme").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = InMemoryPreferenceStore::new();
        store.set("theme", "dark").await.unwrap();
        store.set("theme", "light").await.unwrap();

        assert_eq!(store.get("theme").await.unwrap(), Some("light".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryPreferenceStore::new();
        let other = store.clone();
        store.set("theme", "dark").await.unwrap();

        assert_eq!(other.get("theme").await.unwrap(), Some("dark".to_string()));

        other.clear().await;
        assert!(store.is_empty().await);
    }
}
