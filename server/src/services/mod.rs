//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and outbound calls so route handlers can
//! stay focused on protocol translation.

pub mod auth;
pub mod genai;
