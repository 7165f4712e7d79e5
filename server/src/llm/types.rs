//! LLM types: provider-neutral request targets, response parts, and errors.
//!
//! The `GenerativeModel` trait is the seam the genai service calls through,
//! so prompting and parsing can be tested against a mock.

use client::net::types::ErrorKind;

// =============================================================================
// ERROR
// =============================================================================

/// Gemini `ErrorInfo.reason` for a rejected key.
pub const REASON_API_KEY_INVALID: &str = "API_KEY_INVALID";

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}: {message}")]
    ApiResponse {
        status: u16,
        /// Canonical status string from the error body, e.g. `RESOURCE_EXHAUSTED`.
        code: Option<String>,
        /// First `ErrorInfo.reason`, e.g. `API_KEY_INVALID`.
        reason: Option<String>,
        message: String,
    },

    /// The LLM provider response body could not be deserialized or was empty.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey { .. } | Self::HttpClientBuild(_) => ErrorKind::NotConfigured,
            Self::ApiRequest(_) => ErrorKind::Network,
            Self::ApiParse(_) => ErrorKind::MalformedResponse,
            Self::ApiResponse { status, code, reason, .. } => {
                classify_response(*status, code.as_deref(), reason.as_deref())
            }
        }
    }
}

/// Map an error response to a kind using the structured body first and the
/// HTTP status second.
#[must_use]
pub fn classify_response(status: u16, code: Option<&str>, reason: Option<&str>) -> ErrorKind {
    if reason == Some(REASON_API_KEY_INVALID)
        || matches!(code, Some("UNAUTHENTICATED" | "PERMISSION_DENIED"))
        || matches!(status, 401 | 403)
    {
        return ErrorKind::Unauthorized;
    }
    if status == 429 || code == Some("RESOURCE_EXHAUSTED") {
        return ErrorKind::RateLimited;
    }
    if status >= 500 {
        return ErrorKind::Network;
    }
    ErrorKind::Rejected
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// Which configured model a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTarget {
    Text,
    Image,
}

/// One piece of model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    /// Base64 payload as returned by the provider.
    InlineData { mime_type: Option<String>, data: String },
    /// Anything else (thoughts, function calls). Ignored downstream.
    Unknown,
}

/// Response from a generate call: the first candidate's parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    pub parts: Vec<Part>,
    pub model: String,
}

impl GenerateResponse {
    /// All text parts joined in order.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

// =============================================================================
// GENERATIVE MODEL TRAIT
// =============================================================================

/// Provider-neutral async trait for content generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one single-turn prompt to the model selected by `target`.
    ///
    /// When `response_schema` is set the model is asked for JSON matching it.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the response is malformed,
    /// or the provider rejects the call.
    async fn generate(
        &self,
        target: ModelTarget,
        prompt: &str,
        response_schema: Option<&serde_json::Value>,
    ) -> Result<GenerateResponse, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
