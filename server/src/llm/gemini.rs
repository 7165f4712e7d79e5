//! Gemini `generateContent` REST client.
//!
//! Thin HTTP wrapper for `POST {base}/models/{model}:generateContent`. Pure
//! parsing in `parse_response` and `parse_error_body` for testability.

use std::time::Duration;

use serde_json::Value;

use super::config::LlmTimeouts;
use super::types::{GenerateResponse, LlmError, Part};

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";
/// Upper bound on raw error text carried into logs and error messages.
const MAX_ERROR_BODY_CHARS: usize = 500;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        response_schema: Option<&Value>,
    ) -> Result<GenerateResponse, LlmError> {
        let body = build_request(prompt, response_schema);

        let response = self
            .http
            .post(endpoint(&self.base_url, model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(parse_error_body(status, &text));
        }

        parse_response(&text, model)
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    format!("{base_url}/models/{model}:generateContent")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(serde::Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(serde::Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

fn build_request<'a>(prompt: &'a str, response_schema: Option<&'a Value>) -> ApiRequest<'a> {
    ApiRequest {
        contents: vec![RequestContent { role: "user", parts: vec![RequestPart { text: prompt }] }],
        generation_config: response_schema
            .map(|schema| GenerationConfig { response_mime_type: JSON_MIME_TYPE, response_schema: schema }),
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    model_version: Option<String>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
    #[serde(default)]
    thought: bool,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    data: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(serde::Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str, requested_model: &str) -> Result<GenerateResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(candidate) = api.candidates.into_iter().next() else {
        let reason = api
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map_or_else(|| "no candidates".to_owned(), |r| format!("prompt blocked: {r}"));
        return Err(LlmError::ApiParse(reason));
    };

    let parts: Vec<Part> = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .map(convert_part)
        .collect();

    if parts.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_owned());
        return Err(LlmError::ApiParse(format!("candidate has no content (finish reason {reason})")));
    }

    Ok(GenerateResponse { parts, model: api.model_version.unwrap_or_else(|| requested_model.to_owned()) })
}

fn convert_part(part: ApiPart) -> Part {
    if part.thought {
        return Part::Unknown;
    }
    if let Some(inline) = part.inline_data {
        return Part::InlineData { mime_type: inline.mime_type, data: inline.data };
    }
    match part.text {
        Some(text) => Part::Text(text),
        None => Part::Unknown,
    }
}

/// Turn a non-2xx body into a typed error. Unstructured bodies keep their
/// (truncated) text as the message.
fn parse_error_body(status: u16, body: &str) -> LlmError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => LlmError::ApiResponse {
            status,
            code: envelope.error.status,
            reason: envelope.error.details.into_iter().find_map(|d| d.reason),
            message: envelope.error.message,
        },
        Err(_) => LlmError::ApiResponse {
            status,
            code: None,
            reason: None,
            message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        },
    }
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
