//! Success/error banner used by the auth views.

#[cfg(test)]
#[path = "status_message_test.rs"]
mod status_message_test;

use leptos::prelude::*;

use crate::state::auth::{MessageKind, StatusMessage};

#[must_use]
pub fn message_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "status-message status-message--success",
        MessageKind::Error => "status-message status-message--error",
    }
}

#[component]
pub fn StatusBanner(#[prop(into)] message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! { <div class=message_class(m.kind) role="alert">{m.text}</div> }
        })
    }
}
