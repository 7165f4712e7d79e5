use super::*;
use axum::http::StatusCode;
use client::net::types::{ApiError, AuthOutcome, AuthPurpose, ErrorKind};

use crate::state::test_helpers;

async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn demo_request_code_ok() {
    let body = RequestCodeBody { email: "ada@example.com".into(), purpose: AuthPurpose::Login };
    let resp = request_code(State(test_helpers::test_app_state()), Json(body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let outcome: AuthOutcome = body_json(resp).await;
    assert!(outcome.demo);
    assert!(outcome.message.contains("ada@example.com"));
}

#[tokio::test]
async fn blank_email_is_bad_request() {
    let body = RequestCodeBody { email: "  ".into(), purpose: AuthPurpose::Signup };
    let resp = request_code(State(test_helpers::test_app_state()), Json(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: ApiError = body_json(resp).await;
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[tokio::test]
async fn weak_password_is_bad_request() {
    let body = SignUpBody { email: "ada@example.com".into(), password: "123".into() };
    let resp = sign_up(State(test_helpers::test_app_state()), Json(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn demo_verify_ok() {
    let body = VerifyCodeBody { email: "ada@example.com".into(), code: "123456".into(), purpose: AuthPurpose::Signup };
    let resp = verify_code(State(test_helpers::test_app_state()), Json(body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
