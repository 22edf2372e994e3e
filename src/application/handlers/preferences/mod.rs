//! Visitor preference handlers.

mod theme;

pub use theme::ThemeHandler;
