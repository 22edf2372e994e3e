//! ThemeHandler - Reads and toggles the persisted color theme.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::preferences::{Theme, THEME_KEY};
use crate::ports::{PreferenceError, PreferenceStore};

/// Handler for the theme preference.
pub struct ThemeHandler {
    store: Arc<dyn PreferenceStore>,
    /// Serializes read-modify-write so concurrent toggles each flip once.
    toggle_lock: Mutex<()>,
}

impl ThemeHandler {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            toggle_lock: Mutex::new(()),
        }
    }

    /// Returns the stored theme, or the default when unset or unrecognized.
    pub async fn current(&self) -> Result<Theme, PreferenceError> {
        let stored = self.store.get(THEME_KEY).await?;
        Ok(Theme::from_stored(stored.as_deref()))
    }

    /// Flips the theme, persists it, and returns the new value.
    pub async fn toggle(&self) -> Result<Theme, PreferenceError> {
        let _guard = self.toggle_lock.lock().await;
        let next = self.current().await?.toggled();
        self.store.set(THEME_KEY, next.as_str()).await?;

        tracing::debug!(theme = %next, "Theme toggled");
        Ok(next)
    }
}
