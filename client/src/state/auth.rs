//! Two-stage one-time-code flow shared by the login and signup views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each auth view owns one `AuthFlowState` for as long as it is mounted, so
//! leaving and re-entering a view always starts from a clean slate. The view
//! performs the network calls; this module only decides what the form shows
//! and which inputs are acceptable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthPurpose;

pub const CODE_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;

pub const ENTER_EMAIL: &str = "Enter your work email.";
pub const ENTER_PASSWORD: &str = "Password must be at least 6 characters.";
pub const ENTER_CODE: &str = "Enter the 6-digit code from your email.";
pub const REQUEST_FAILED: &str = "Failed to connect to the auth service.";
pub const VERIFY_FAILED: &str = "Verification failed.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStage {
    #[default]
    CollectingCredentials,
    AwaitingCode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

/// Validated first-stage input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    /// Only collected by the signup view.
    pub password: Option<String>,
}

/// Form state for one auth view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFlowState {
    pub purpose: AuthPurpose,
    pub email: String,
    pub password: String,
    pub code: String,
    pub stage: AuthStage,
    pub message: Option<StatusMessage>,
    pub busy: bool,
}

impl AuthFlowState {
    #[must_use]
    pub fn new(purpose: AuthPurpose) -> Self {
        Self { purpose, ..Self::default() }
    }

    /// Validate the first stage and mark the form busy.
    ///
    /// Returns `None` (and leaves the form idle) while a request is in flight.
    pub fn begin_request(&mut self) -> Option<Result<Credentials, &'static str>> {
        if self.busy {
            return None;
        }
        let validated = match self.purpose {
            AuthPurpose::Login => validate_email(&self.email).map(|email| Credentials { email, password: None }),
            AuthPurpose::Signup => validate_email(&self.email).and_then(|email| {
                validate_password(&self.password).map(|password| Credentials { email, password: Some(password) })
            }),
        };
        match &validated {
            Ok(creds) => {
                self.email.clone_from(&creds.email);
                self.busy = true;
                self.message = None;
            }
            Err(text) => self.message = Some(StatusMessage::error(*text)),
        }
        Some(validated)
    }

    /// The backend accepted the first stage; move on to code entry.
    pub fn code_sent(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.stage = AuthStage::AwaitingCode;
        self.message = Some(StatusMessage::success(message));
    }

    /// The first stage failed; show the reason and stay.
    pub fn request_failed(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.message = Some(StatusMessage::error(message));
    }

    /// Validate the code and mark the form busy.
    pub fn begin_verify(&mut self) -> Option<Result<(String, String), &'static str>> {
        if self.busy || self.stage != AuthStage::AwaitingCode {
            return None;
        }
        let validated = normalize_code(&self.code).ok_or(ENTER_CODE).map(|code| (self.email.clone(), code));
        match &validated {
            Ok(_) => self.busy = true,
            Err(text) => self.message = Some(StatusMessage::error(*text)),
        }
        Some(validated)
    }

    /// Verification failed; the backend text is shown unchanged.
    pub fn verify_failed(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.message = Some(StatusMessage::error(message));
    }

    /// Return to credential entry, discarding the code and any message.
    pub fn back(&mut self) {
        if self.busy {
            return;
        }
        self.stage = AuthStage::CollectingCredentials;
        self.code.clear();
        self.message = None;
    }
}

/// Trim and lightly check an email address.
///
/// # Errors
///
/// Returns the message to show when the address is empty or has no `@`.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(email.to_owned()),
        _ => Err(ENTER_EMAIL),
    }
}

/// # Errors
///
/// Returns the message to show when the password is too short.
pub fn validate_password(raw: &str) -> Result<String, &'static str> {
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(ENTER_PASSWORD);
    }
    Ok(raw.to_owned())
}

/// Strip whitespace and require exactly six ASCII digits.
#[must_use]
pub fn normalize_code(raw: &str) -> Option<String> {
    let code: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    (code.len() == CODE_LEN && code.chars().all(|c| c.is_ascii_digit())).then_some(code)
}

/// Keep only digits while typing, capped at the code length.
#[must_use]
pub fn sanitize_code_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(CODE_LEN).collect()
}
