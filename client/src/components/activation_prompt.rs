//! Blocking prompt shown when a managed host has no API key selected.

use leptos::prelude::*;

#[component]
pub fn ActivationPrompt(#[prop(into)] busy: Signal<bool>, on_activate: Callback<()>) -> impl IntoView {
    view! {
        <section class="activation">
            <div class="auth-card">
                <div class="brand__mark brand__mark--lg">"A"</div>
                <h2 class="auth-card__title">"Activate AdBuy.ai"</h2>
                <p class="auth-card__subtitle">
                    "Select a Gemini API key to unlock the Creative Studio and Strategy Generator."
                </p>
                <button
                    class="btn btn--primary btn--block"
                    disabled=move || busy.get()
                    on:click=move |_| on_activate.run(())
                >
                    {move || if busy.get() { "Waiting for key selection..." } else { "Select API Key" }}
                </button>
                <p class="activation__hint">
                    <a href="https://ai.google.dev/gemini-api/docs/billing" target="_blank" rel="noopener">
                        "Learn about API key billing"
                    </a>
                </p>
            </div>
        </section>
    }
}
