//! AI demo routes: strategy generator and creative lab.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{CreativeBody, CreativeImage, StrategyBody};

use super::error_response;
use crate::services::genai::{self, GenAiError};
use crate::state::AppState;

/// Model failures get a fixed message; the details are already logged.
fn genai_error(err: &GenAiError) -> Response {
    let message = match err {
        GenAiError::EmptyInput | GenAiError::NotConfigured => err.to_string(),
        GenAiError::Llm(_) | GenAiError::Malformed(_) => "AI generation failed. Please try again.".to_owned(),
    };
    error_response(err.kind(), message)
}

/// `POST /api/ai/strategy`
pub async fn strategy(State(state): State<AppState>, Json(body): Json<StrategyBody>) -> Response {
    let Some(model) = state.llm.as_deref() else {
        return genai_error(&GenAiError::NotConfigured);
    };
    match genai::generate_strategy(model, &body.product).await {
        Ok(strategy) => Json(strategy).into_response(),
        Err(e) => genai_error(&e),
    }
}

/// `POST /api/ai/creative`
pub async fn creative(State(state): State<AppState>, Json(body): Json<CreativeBody>) -> Response {
    let Some(model) = state.llm.as_deref() else {
        return genai_error(&GenAiError::NotConfigured);
    };
    match genai::generate_creative(model, &body.prompt).await {
        Ok(image) => Json(CreativeImage { image }).into_response(),
        Err(e) => genai_error(&e),
    }
}

#[cfg(test)]
#[path = "ai_test.rs"]
mod tests;
