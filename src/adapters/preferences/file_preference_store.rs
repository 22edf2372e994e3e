//! File-based Preference Store Adapter
//!
//! Stores all preferences as a single YAML map on disk. The file is read
//! on every `get` so edits made outside the process are picked up.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{PreferenceError, PreferenceStore};

type PreferenceMap = BTreeMap<String, String>;

/// File-based storage for preferences
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Create a store backed by the YAML file at `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FilePreferenceStore::new("./data/preferences.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<PreferenceMap, PreferenceError> {
        if !self.path.exists() {
            return Ok(PreferenceMap::new());
        }

        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| PreferenceError::IoError(e.to_string()))?;

        if yaml.trim().is_empty() {
            return Ok(PreferenceMap::new());
        }

        serde_yaml::from_str(&yaml).map_err(|e| PreferenceError::DeserializationFailed(e.to_string()))
    }

    async fn save(&self, values: &PreferenceMap) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PreferenceError::IoError(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(values)
            .map_err(|e| PreferenceError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, yaml)
            .await
            .map_err(|e| PreferenceError::IoError(e.to_string()))
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().await;

        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values).await
    }
}
