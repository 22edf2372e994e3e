//! HTTP DTOs for preference endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::preferences::Theme;

/// Current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self { theme }
    }
}
