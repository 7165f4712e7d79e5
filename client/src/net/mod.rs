//! Networking modules for the server's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints and `types` defines the wire schema shared
//! with the server crate.

pub mod api;
pub mod types;
