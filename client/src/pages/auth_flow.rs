//! Network side of the login/signup views.
//!
//! The form rules live in `state::auth`; these helpers drive an
//! `AuthFlowState` signal through a request and map failures to the text the
//! form shows.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use leptos::prelude::*;

use crate::net::types::{ApiError, AuthPurpose, ErrorKind};
use crate::state::auth::{AuthFlowState, REQUEST_FAILED, VERIFY_FAILED};
use crate::state::ui::UiState;

/// Pause before the demo shortcut lands on the dashboard.
pub(crate) const DEMO_DELAY_MS: u32 = 800;

/// Fresh form state for a newly mounted login or signup view. Nothing
/// carries over from an earlier visit.
pub(crate) fn mount_flow(purpose: AuthPurpose) -> RwSignal<AuthFlowState> {
    RwSignal::new(AuthFlowState::new(purpose))
}

/// Backend rejections are shown verbatim; transport failures get a fixed line.
pub(crate) fn request_error_text(err: &ApiError) -> String {
    failure_text(err, REQUEST_FAILED)
}

pub(crate) fn verify_error_text(err: &ApiError) -> String {
    failure_text(err, VERIFY_FAILED)
}

fn failure_text(err: &ApiError, transport_notice: &str) -> String {
    if err.kind == ErrorKind::Network || err.message.trim().is_empty() {
        transport_notice.to_owned()
    } else {
        err.message.clone()
    }
}

/// First stage: request a code (login) or register (signup).
pub(crate) fn submit_credentials(flow: RwSignal<AuthFlowState>) {
    let Some(Ok(creds)) = flow.try_update(AuthFlowState::begin_request).flatten() else {
        return;
    };
    let purpose = flow.with_untracked(|f| f.purpose);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = match (purpose, creds.password.as_deref()) {
            (AuthPurpose::Signup, Some(password)) => crate::net::api::sign_up(&creds.email, password).await,
            _ => crate::net::api::request_code(&creds.email, purpose).await,
        };
        match outcome {
            Ok(outcome) => flow.update(|f| f.code_sent(outcome.message)),
            Err(e) => {
                log::warn!("auth request failed: {e}");
                flow.update(|f| f.request_failed(request_error_text(&e)));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (creds, purpose);
        flow.update(|f| f.request_failed(REQUEST_FAILED));
    }
}

/// Second stage: verify the code and land on the landing page.
pub(crate) fn submit_code(flow: RwSignal<AuthFlowState>, ui: RwSignal<UiState>) {
    let Some(Ok((email, code))) = flow.try_update(AuthFlowState::begin_verify).flatten() else {
        return;
    };
    let purpose = flow.with_untracked(|f| f.purpose);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::verify_code(&email, &code, purpose).await {
            Ok(_) => crate::app::navigate_to(ui, crate::state::ui::Page::Landing),
            Err(e) => {
                log::warn!("code verification failed: {e}");
                flow.update(|f| f.verify_failed(verify_error_text(&e)));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code, purpose, ui);
        flow.update(|f| f.verify_failed(VERIFY_FAILED));
    }
}

/// Demo shortcut: skip the backend entirely.
pub(crate) fn launch_demo(flow: RwSignal<AuthFlowState>, ui: RwSignal<UiState>) {
    if flow.get_untracked().busy {
        return;
    }
    flow.update(|f| f.busy = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(DEMO_DELAY_MS).await;
        crate::app::navigate_to(ui, crate::state::ui::Page::Landing);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
