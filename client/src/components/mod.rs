//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing-page sections, the site chrome, and the two
//! AI demo widgets while reading/writing shared state from Leptos context
//! providers.

pub mod activation_prompt;
pub mod creative_lab;
pub mod features;
pub mod final_cta;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod loading;
pub mod logo_strip;
pub mod navbar;
pub mod pricing;
pub mod status_message;
pub mod strategy_generator;
mod widget;
