//! Auth backend: hosted GoTrue-compatible email/OTP service.
//!
//! DESIGN
//! ======
//! Resolved once at start-up from environment variables. When the URL or key
//! is missing or obviously a placeholder the server runs in demo mode and
//! never contacts a backend. The `AuthBackend` trait is the seam the auth
//! service calls through so flows can be tested without a network.

pub mod config;
pub mod gotrue;
pub mod types;

pub use config::{AuthBackendConfig, AuthMode};
pub use types::{AuthBackend, AuthBackendError, OtpType};
