#![recursion_limit = "256"]

mod auth_backend;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::auth_backend::AuthBackendConfig;
use crate::llm::GenerativeModel;
use crate::llm::types::ModelTarget;
use crate::services::auth::AuthService;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Auth falls back to demo mode when the backend is missing or invalid.
    let auth_mode = AuthBackendConfig::resolve();
    let auth = AuthService::from_mode(&auth_mode).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "auth backend client failed, running auth in demo mode");
        AuthService::demo()
    });

    // Initialize LLM client (non-fatal: AI features disabled if config missing).
    let llm: Option<Arc<dyn GenerativeModel>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(
                text_model = client.model(ModelTarget::Text),
                image_model = client.model(ModelTarget::Image),
                "LLM client initialized"
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, AI features disabled");
            None
        }
    };

    let state = state::AppState::new(auth, llm);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "adbuy listening");
    axum::serve(listener, app).await.expect("server failed");
}
