use super::*;
use client::net::types::ErrorKind;

// =============================================================================
// build_request / endpoint
// =============================================================================

#[test]
fn endpoint_joins_model_path() {
    assert_eq!(
        endpoint("https://generativelanguage.googleapis.com/v1beta", "gemini-2.5-flash-image"),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image:generateContent"
    );
}

#[test]
fn request_without_schema_has_no_generation_config() {
    let json = serde_json::to_value(build_request("hello", None)).unwrap();
    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    assert!(json.get("generationConfig").is_none());
}

#[test]
fn request_with_schema_asks_for_json() {
    let schema = serde_json::json!({ "type": "OBJECT" });
    let json = serde_json::to_value(build_request("plan", Some(&schema))).unwrap();
    assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
}

// =============================================================================
// parse_response
// =============================================================================

#[test]
fn parse_text_candidate() {
    let body = r#"{
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": "{\"headline\":\"Hi\"}" }] }, "finishReason": "STOP" }],
        "modelVersion": "gemini-3-flash-preview"
    }"#;
    let resp = parse_response(body, "requested").unwrap();
    assert_eq!(resp.model, "gemini-3-flash-preview");
    assert_eq!(resp.parts, vec![Part::Text("{\"headline\":\"Hi\"}".into())]);
}

#[test]
fn parse_inline_data_candidate() {
    let body = r#"{
        "candidates": [{ "content": { "parts": [
            { "text": "Here is your ad" },
            { "inlineData": { "mimeType": "image/jpeg", "data": "/9j/4AAQ" } }
        ] } }]
    }"#;
    let resp = parse_response(body, "gemini-2.5-flash-image").unwrap();
    assert_eq!(resp.model, "gemini-2.5-flash-image");
    assert_eq!(
        resp.parts[1],
        Part::InlineData { mime_type: Some("image/jpeg".into()), data: "/9j/4AAQ".into() }
    );
}

#[test]
fn parse_marks_thoughts_unknown() {
    let body = r#"{ "candidates": [{ "content": { "parts": [
        { "text": "thinking...", "thought": true },
        { "text": "answer" }
    ] } }] }"#;
    let resp = parse_response(body, "m").unwrap();
    assert_eq!(resp.parts, vec![Part::Unknown, Part::Text("answer".into())]);
}

#[test]
fn parse_no_candidates_is_parse_error() {
    let err = parse_response(r#"{ "candidates": [] }"#, "m").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[test]
fn parse_blocked_prompt_mentions_reason() {
    let err = parse_response(r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#, "m").unwrap_err();
    assert!(err.to_string().contains("SAFETY"));
}

#[test]
fn parse_candidate_without_content() {
    let err = parse_response(r#"{ "candidates": [{ "finishReason": "MAX_TOKENS" }] }"#, "m").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(ref m) if m.contains("MAX_TOKENS")));
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json", "m").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

// =============================================================================
// parse_error_body
// =============================================================================

#[test]
fn error_body_invalid_key() {
    let body = r#"{
        "error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "INVALID_ARGUMENT",
            "details": [
                { "@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "API_KEY_INVALID", "domain": "googleapis.com" }
            ]
        }
    }"#;
    let err = parse_error_body(400, body);
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(err.to_string().contains("API key not valid"));
}

#[test]
fn error_body_quota() {
    let body = r#"{ "error": { "code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED" } }"#;
    assert_eq!(parse_error_body(429, body).kind(), ErrorKind::RateLimited);
}

#[test]
fn error_body_unstructured_keeps_text() {
    let err = parse_error_body(502, "<html>Bad Gateway</html>");
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(matches!(err, LlmError::ApiResponse { ref message, code: None, .. } if message.contains("Bad Gateway")));
}

#[test]
fn error_body_truncates_long_text() {
    let body = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
    let LlmError::ApiResponse { message, .. } = parse_error_body(500, &body) else {
        panic!("expected ApiResponse");
    };
    assert_eq!(message.len(), MAX_ERROR_BODY_CHARS);
}
