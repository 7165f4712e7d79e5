//! Auth backend errors and the async trait the auth service depends on.

use client::net::types::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum AuthBackendError {
    /// The request never got an HTTP answer.
    #[error("auth request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status. `message` is the
    /// backend's own text, suitable for showing to the visitor.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl AuthBackendError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request(_) => ErrorKind::Network,
            Self::HttpClientBuild(_) => ErrorKind::NotConfigured,
            Self::Rejected { status: 429, .. } => ErrorKind::RateLimited,
            Self::Rejected { status, .. } if *status >= 500 => ErrorKind::Network,
            Self::Rejected { .. } => ErrorKind::Rejected,
        }
    }
}

/// Which flow a one-time code is verified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpType {
    Email,
    Signup,
}

impl OtpType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Signup => "signup",
        }
    }
}

/// Email/OTP operations offered by a hosted auth backend.
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    /// Email a one-time code. With `create_user = false` an unknown address
    /// is rejected instead of registered.
    async fn send_otp(&self, email: &str, create_user: bool) -> Result<(), AuthBackendError>;

    /// Register an email/password account; the backend emails a confirmation code.
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthBackendError>;

    /// Check a one-time code.
    async fn verify_otp(&self, email: &str, token: &str, otp_type: OtpType) -> Result<(), AuthBackendError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
