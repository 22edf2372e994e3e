//! Portfolio Contact - Backend for a personal portfolio page
//!
//! Handles the contact form (with an AI-generated acknowledgment fetched
//! through a retrying HTTP invoker), the persisted color theme, active
//! section tracking and the resume download.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
