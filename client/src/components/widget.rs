//! Submission driver shared by the two AI demo widgets.

use std::future::Future;

use leptos::prelude::*;

use crate::net::types::ApiError;
#[cfg(feature = "hydrate")]
use crate::state::demo::FinishAction;
use crate::state::demo::{SubmitDecision, WidgetState};

/// Run one submit event through `state`, calling `request` with the trimmed
/// input when the widget is activated and idle.
///
/// Failures are logged to the browser console; `on_activate` runs when the
/// widget is not activated or when the backend rejected the key.
pub(crate) fn submit_widget<T, F, Fut>(
    state: RwSignal<WidgetState<T>>,
    activated: bool,
    on_activate: Callback<()>,
    label: &'static str,
    request: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    match state.try_update(|s| s.begin_submit(activated)) {
        Some(SubmitDecision::Send(text)) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let outcome = request(text).await;
                if let Err(e) = &outcome {
                    log::error!("{label} failed: {e}");
                }
                if state.try_update(|s| s.finish(outcome)) == Some(FinishAction::Reactivate) {
                    on_activate.run(());
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (text, label, request);
                state.update(|s| s.loading = false);
            }
        }
        Some(SubmitDecision::Activate) => on_activate.run(()),
        Some(SubmitDecision::Ignore) | None => {}
    }
}
