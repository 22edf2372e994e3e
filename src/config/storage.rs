//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// On-disk locations used by the service
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// YAML file holding visitor preferences; in-memory when unset
    pub preferences_path: Option<PathBuf>,

    /// Resume file served by `GET /api/resume`
    #[serde(default = "default_resume_path")]
    pub resume_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_path: None,
            resume_path: default_resume_path(),
        }
    }
}

fn default_resume_path() -> PathBuf {
    PathBuf::from("assets/resume.pdf")
}
