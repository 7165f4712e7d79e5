//! LLM: generative model adapter for the AI demo features.
//!
//! DESIGN
//! ======
//! Uses environment variables instead of config files. `LlmClient` owns one
//! Gemini HTTP client and routes each request to the text or image model
//! named in `LlmConfig`.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::GenerativeModel;
use types::{GenerateResponse, LlmError, ModelTarget};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete generative model client backed by the Gemini REST API.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: gemini::GeminiClient,
    text_model: String,
    image_model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// - `LLM_API_KEY_ENV`: name of env var holding the API key (default `GEMINI_API_KEY`)
    /// - `LLM_TEXT_MODEL`: model used for structured text
    /// - `LLM_IMAGE_MODEL`: model used for image generation
    /// - `LLM_BASE_URL`: custom base URL for Gemini-compatible APIs
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, text_model: config.text_model, image_model: config.image_model })
    }

    /// Model name used for a given target.
    #[must_use]
    pub fn model(&self, target: ModelTarget) -> &str {
        match target {
            ModelTarget::Text => &self.text_model,
            ModelTarget::Image => &self.image_model,
        }
    }
}

#[async_trait::async_trait]
impl GenerativeModel for LlmClient {
    async fn generate(
        &self,
        target: ModelTarget,
        prompt: &str,
        response_schema: Option<&serde_json::Value>,
    ) -> Result<GenerateResponse, LlmError> {
        self.inner.generate_content(self.model(target), prompt, response_schema).await
    }
}
