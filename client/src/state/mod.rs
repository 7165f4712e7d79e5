//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` for the root, `auth` for the login/signup
//! forms, `demo` for the AI widgets) so each component depends on a small
//! focused model that can be tested without a browser.

pub mod auth;
pub mod demo;
pub mod ui;
