//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate with the `ssr` feature and serializes
//! these same types, so request and response shapes cannot drift between the
//! two halves. Field names follow the JSON the browser has always seen
//! (camelCase for strategy fields).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERRORS
// =============================================================================

/// Machine-readable failure category attached to every API error body.
///
/// Callers branch on the kind, never on the message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The upstream access key is missing, invalid, or lacks permission.
    Unauthorized,
    /// The upstream service throttled the request.
    RateLimited,
    /// The request never completed (transport failure or upstream 5xx).
    Network,
    /// The upstream answered with something we could not interpret.
    MalformedResponse,
    /// The auth backend refused the request (bad code, unknown account, ...).
    Rejected,
    /// The caller sent an empty or ill-formed value.
    InvalidInput,
    /// The integration is not configured on this server.
    NotConfigured,
}

/// Error body returned by every JSON endpoint on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ErrorKind,
    #[serde(rename = "error")]
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Transport-level failure (request never got a JSON answer).
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// CONFIG
// =============================================================================

/// `GET /api/config` response: what the server resolved at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    /// `true` when no auth backend is configured and auth runs locally.
    pub auth_demo_mode: bool,
    /// `true` when a generative model key is available.
    pub ai_configured: bool,
}

// =============================================================================
// AUTH
// =============================================================================

/// Which account flow a one-time code belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthPurpose {
    /// Sign in to an existing account.
    #[default]
    Login,
    /// Confirm a freshly created account.
    Signup,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCodeBody {
    pub email: String,
    pub purpose: AuthPurpose,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpBody {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeBody {
    pub email: String,
    pub code: String,
    pub purpose: AuthPurpose,
}

/// Successful auth step. `demo` is set when no backend was contacted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub demo: bool,
    pub message: String,
}

// =============================================================================
// GENERATIVE AI
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyBody {
    pub product: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeBody {
    pub prompt: String,
}

/// `POST /api/ai/creative` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeImage {
    /// `data:<mime>;base64,<payload>` URI, ready for an `<img src>`.
    pub image: String,
}

/// Media plan produced by the strategy model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdStrategy {
    pub headline: String,
    pub target_audience: String,
    pub channels: Vec<String>,
    pub suggested_budget: String,
    pub creative_hook: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_pain_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roas_projection: Option<String>,
}

impl AdStrategy {
    /// A strategy is usable when the fields the widget headlines are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.headline.trim().is_empty()
            && !self.target_audience.trim().is_empty()
            && self.channels.iter().any(|c| !c.trim().is_empty())
    }
}
