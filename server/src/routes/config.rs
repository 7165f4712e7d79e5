//! `GET /api/config`: what the server resolved at start-up.

use axum::extract::State;
use axum::response::Json;
use client::net::types::PublicConfig;

use crate::state::AppState;

pub async fn public_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(PublicConfig { auth_demo_mode: state.auth.is_demo(), ai_configured: state.ai_configured() })
}
