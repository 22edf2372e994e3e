//! Application handlers.
//!
//! Handlers that orchestrate domain operations over ports.

pub mod contact;
pub mod preferences;

pub use contact::SubmitContactHandler;
pub use preferences::ThemeHandler;
