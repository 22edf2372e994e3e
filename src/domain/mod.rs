//! Domain layer - Pure state and rules.
//!
//! Nothing in here performs I/O; ports and adapters do that.

pub mod contact;
pub mod foundation;
pub mod navigation;
pub mod preferences;
