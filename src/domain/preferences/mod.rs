//! Preferences domain module.
//!
//! Visitor preferences persisted through the `PreferenceStore` port.

mod theme;

pub use theme::{Theme, THEME_KEY};
