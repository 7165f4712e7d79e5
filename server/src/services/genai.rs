//! Generative AI service: media plans and ad creatives.
//!
//! DESIGN
//! ======
//! Builds the prompts, asks the model for structured JSON or an image, and
//! validates what comes back. Anything unusable is a `MalformedResponse`;
//! there is no retry, caching, or partial result.

use std::sync::OnceLock;

use base64::Engine as _;
use client::net::types::{AdStrategy, ErrorKind};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::llm::GenerativeModel;
use crate::llm::types::{LlmError, ModelTarget, Part};

const DEFAULT_IMAGE_MIME: &str = "image/png";

#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("input must not be empty")]
    EmptyInput,
    #[error("AI model not configured")]
    NotConfigured,
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("unusable model response: {0}")]
    Malformed(String),
}

impl GenAiError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::InvalidInput,
            Self::NotConfigured => ErrorKind::NotConfigured,
            Self::Llm(e) => e.kind(),
            Self::Malformed(_) => ErrorKind::MalformedResponse,
        }
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

#[must_use]
pub fn strategy_prompt(product: &str) -> String {
    format!("Act as a senior media buyer at AdBuy.ai. Create a comprehensive advertising strategy for: {product}")
}

#[must_use]
pub fn creative_prompt(prompt: &str) -> String {
    format!(
        "A high-quality, professional digital advertisement image for: {prompt}. \
         Cinematic lighting, minimalist aesthetic, suitable for Instagram or Facebook ads."
    )
}

/// Response schema for [`generate_strategy`]; every field is required.
pub fn strategy_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        json!({
            "type": "OBJECT",
            "properties": {
                "headline": { "type": "STRING" },
                "targetAudience": { "type": "STRING" },
                "channels": { "type": "ARRAY", "items": { "type": "STRING" } },
                "suggestedBudget": { "type": "STRING" },
                "creativeHook": { "type": "STRING" },
                "primaryPainPoint": { "type": "STRING" },
                "roasProjection": { "type": "STRING" }
            },
            "required": [
                "headline",
                "targetAudience",
                "channels",
                "suggestedBudget",
                "creativeHook",
                "primaryPainPoint",
                "roasProjection"
            ]
        })
    })
}

fn non_blank(input: &str) -> Result<&str, GenAiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() { Err(GenAiError::EmptyInput) } else { Ok(trimmed) }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Ask the text model for a media plan.
///
/// # Errors
///
/// Returns [`GenAiError::EmptyInput`] for blank input, the model's error, or
/// [`GenAiError::Malformed`] when the answer is not a usable strategy.
pub async fn generate_strategy(model: &dyn GenerativeModel, product: &str) -> Result<AdStrategy, GenAiError> {
    let product = non_blank(product)?;
    let response = model
        .generate(ModelTarget::Text, &strategy_prompt(product), Some(strategy_schema()))
        .await
        .inspect_err(|e| warn!(error = %e, "strategy generation failed"))?;

    let strategy = parse_strategy(&response.text())?;
    info!(model = %response.model, channels = strategy.channels.len(), "strategy generated");
    Ok(strategy)
}

/// Ask the image model for an ad creative and return it as a `data:` URI.
///
/// # Errors
///
/// Returns [`GenAiError::EmptyInput`] for blank input, the model's error, or
/// [`GenAiError::Malformed`] when no usable image came back.
pub async fn generate_creative(model: &dyn GenerativeModel, prompt: &str) -> Result<String, GenAiError> {
    let prompt = non_blank(prompt)?;
    let response = model
        .generate(ModelTarget::Image, &creative_prompt(prompt), None)
        .await
        .inspect_err(|e| warn!(error = %e, "creative generation failed"))?;

    let uri = image_data_uri(&response.parts)?;
    info!(model = %response.model, bytes = uri.len(), "creative generated");
    Ok(uri)
}

pub(crate) fn parse_strategy(text: &str) -> Result<AdStrategy, GenAiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenAiError::Malformed("empty strategy text".into()));
    }
    let strategy: AdStrategy =
        serde_json::from_str(text).map_err(|e| GenAiError::Malformed(format!("strategy json: {e}")))?;
    if !strategy.is_complete() {
        return Err(GenAiError::Malformed("strategy missing headline, audience, or channels".into()));
    }
    Ok(strategy)
}

/// `data:` URI for the first inline image. The MIME type defaults to
/// `image/png`; a model that labels its image (e.g. `image/jpeg`) keeps its
/// own type so the browser decodes it correctly.
pub(crate) fn image_data_uri(parts: &[Part]) -> Result<String, GenAiError> {
    let (mime_type, data) = parts
        .iter()
        .find_map(|p| match p {
            Part::InlineData { mime_type, data } => Some((mime_type.as_deref(), data.trim())),
            _ => None,
        })
        .ok_or_else(|| GenAiError::Malformed("no image in response".into()))?;

    if data.is_empty() {
        return Err(GenAiError::Malformed("empty image payload".into()));
    }
    base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|e| GenAiError::Malformed(format!("image payload is not base64: {e}")))?;

    let mime = mime_type.filter(|m| !m.trim().is_empty()).unwrap_or(DEFAULT_IMAGE_MIME);
    Ok(format!("data:{mime};base64,{data}"))
}

#[cfg(test)]
#[path = "genai_test.rs"]
mod tests;
