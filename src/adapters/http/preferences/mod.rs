//! Preferences HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::ThemeResponse;
pub use handlers::PreferenceHandlers;
pub use routes::preference_routes;
