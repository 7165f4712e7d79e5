//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the auth service (demo or backend-backed) and the optional
//! generative model. Nothing in it is mutable after start-up.

use std::sync::Arc;

use crate::llm::GenerativeModel;
use crate::services::auth::AuthService;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    /// `None` when no model key is configured; AI routes answer `NotConfigured`.
    pub llm: Option<Arc<dyn GenerativeModel>>,
}

impl AppState {
    #[must_use]
    pub fn new(auth: AuthService, llm: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { auth, llm }
    }

    #[must_use]
    pub fn ai_configured(&self) -> bool {
        self.llm.is_some()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Demo auth, no model.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(AuthService::demo(), None)
    }

    #[must_use]
    pub fn with_llm(model: Arc<dyn GenerativeModel>) -> AppState {
        AppState::new(AuthService::demo(), Some(model))
    }
}
