//! Auth service: email/OTP sign-in and sign-up with a demo fallback.
//!
//! DESIGN
//! ======
//! Wraps an optional `AuthBackend`. Without one every call with a non-empty
//! email (and code) succeeds locally and is labelled `[DEMO]`; with one,
//! inputs are normalized here and the backend's rejections are passed
//! through with their own message.

use std::sync::Arc;

use client::net::types::{AuthOutcome, AuthPurpose, ErrorKind};
use tracing::{info, warn};

use crate::auth_backend::gotrue::GoTrueClient;
use crate::auth_backend::{AuthBackend, AuthBackendError, AuthMode, OtpType};

const CODE_LEN: usize = 6;
const MIN_PASSWORD_LEN: usize = 6;

const CODE_SENT: &str = "Verification code sent! Check your inbox.";
const SIGNED_UP: &str = "Registration successful! Enter the code from your email.";
const VERIFIED: &str = "Verified! Welcome to AdBuy.ai.";
const DEMO_SIGNED_UP: &str = "[DEMO] Account created. Please enter any 6 digits.";
const DEMO_VERIFIED: &str = "[DEMO] Code accepted.";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 6 characters.")]
    WeakPassword,
    #[error("Please enter the 6-digit code.")]
    InvalidCode,
    #[error(transparent)]
    Backend(#[from] AuthBackendError),
}

impl AuthError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail | Self::WeakPassword | Self::InvalidCode => ErrorKind::InvalidInput,
            Self::Backend(e) => e.kind(),
        }
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    (trimmed.len() == CODE_LEN && trimmed.bytes().all(|b| b.is_ascii_digit())).then(|| trimmed.to_owned())
}

/// Demo mode only needs something to echo back.
fn demo_email(email: &str) -> Result<String, AuthError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(AuthError::InvalidEmail);
    }
    Ok(normalize_email(trimmed).unwrap_or_else(|| trimmed.to_owned()))
}

fn otp_type(purpose: AuthPurpose) -> OtpType {
    match purpose {
        AuthPurpose::Login => OtpType::Email,
        AuthPurpose::Signup => OtpType::Signup,
    }
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Clone, Default)]
pub struct AuthService {
    backend: Option<Arc<dyn AuthBackend>>,
}

impl AuthService {
    /// Auth that never leaves the process.
    #[must_use]
    pub fn demo() -> Self {
        Self { backend: None }
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn AuthBackend>) -> Self {
        Self { backend: Some(backend) }
    }

    /// Build the service for a resolved auth mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn from_mode(mode: &AuthMode) -> Result<Self, AuthBackendError> {
        match mode {
            AuthMode::Configured(cfg) => Ok(Self::with_backend(Arc::new(GoTrueClient::new(cfg)?))),
            AuthMode::Demo => Ok(Self::demo()),
        }
    }

    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.backend.is_none()
    }

    /// Email a one-time code. Login never creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] or the backend's rejection.
    pub async fn request_code(&self, email: &str, purpose: AuthPurpose) -> Result<AuthOutcome, AuthError> {
        let Some(backend) = &self.backend else {
            let email = demo_email(email)?;
            info!(%email, ?purpose, "demo code request");
            return Ok(demo(format!("[DEMO] Magic link sent to {email}")));
        };
        let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;

        let create_user = purpose == AuthPurpose::Signup;
        backend
            .send_otp(&email, create_user)
            .await
            .inspect_err(|e| warn!(%email, ?purpose, error = %e, "code request rejected"))?;
        info!(%email, ?purpose, "code sent");
        Ok(sent(CODE_SENT))
    }

    /// Register an email/password account.
    ///
    /// # Errors
    ///
    /// Returns a validation error or the backend's rejection.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        let Some(backend) = &self.backend else {
            let email = demo_email(email)?;
            info!(%email, "demo sign-up");
            return Ok(demo(DEMO_SIGNED_UP.to_owned()));
        };
        let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;

        backend
            .sign_up(&email, password)
            .await
            .inspect_err(|e| warn!(%email, error = %e, "sign-up rejected"))?;
        info!(%email, "sign-up accepted");
        Ok(sent(SIGNED_UP))
    }

    /// Check a one-time code for the given flow.
    ///
    /// # Errors
    ///
    /// Returns a validation error or the backend's rejection.
    pub async fn verify_code(&self, email: &str, code: &str, purpose: AuthPurpose) -> Result<AuthOutcome, AuthError> {
        let Some(backend) = &self.backend else {
            let email = demo_email(email)?;
            if code.trim().is_empty() {
                return Err(AuthError::InvalidCode);
            }
            info!(%email, ?purpose, "demo verification");
            return Ok(demo(DEMO_VERIFIED.to_owned()));
        };
        let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
        let code = normalize_code(code).ok_or(AuthError::InvalidCode)?;

        backend
            .verify_otp(&email, &code, otp_type(purpose))
            .await
            .inspect_err(|e| warn!(%email, ?purpose, error = %e, "verification rejected"))?;
        info!(%email, ?purpose, "verified");
        Ok(sent(VERIFIED))
    }
}

fn demo(message: String) -> AuthOutcome {
    AuthOutcome { demo: true, message }
}

fn sent(message: &str) -> AuthOutcome {
    AuthOutcome { demo: false, message: message.to_owned() }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
