//! Page modules for the top-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns view-scoped orchestration and delegates rendering details
//! to `components`. The root swaps pages by state, not by URL.

pub(crate) mod auth_flow;
pub mod landing;
pub mod login;
pub mod signup;
