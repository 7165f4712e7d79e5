//! Full-page and inline spinners.

use leptos::prelude::*;

/// Shown while the key status is still being resolved.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status">
            <Spinner large=true/>
        </div>
    }
}

#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    view! { <span class=if large { "spinner spinner--lg" } else { "spinner" }></span> }
}
