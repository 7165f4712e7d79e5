//! Auth routes: one-time code request, sign-up, and verification.
//!
//! Handlers only translate JSON; validation, demo mode, and backend calls
//! live in `services::auth`.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{RequestCodeBody, SignUpBody, VerifyCodeBody};

use super::error_response;
use crate::services::auth::AuthError;
use crate::state::AppState;

fn auth_error(err: &AuthError) -> Response {
    error_response(err.kind(), err.to_string())
}

/// `POST /api/auth/request-code`
pub async fn request_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    match state.auth.request_code(&body.email, body.purpose).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => auth_error(&e),
    }
}

/// `POST /api/auth/sign-up`
pub async fn sign_up(State(state): State<AppState>, Json(body): Json<SignUpBody>) -> Response {
    match state.auth.sign_up(&body.email, &body.password).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => auth_error(&e),
    }
}

/// `POST /api/auth/verify-code`
pub async fn verify_code(State(state): State<AppState>, Json(body): Json<VerifyCodeBody>) -> Response {
    match state.auth.verify_code(&body.email, &body.code, body.purpose).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => auth_error(&e),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
