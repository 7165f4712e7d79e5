//! Closing call-to-action above the footer.

use leptos::prelude::*;

use crate::app::navigate_to;
use crate::state::ui::{Page, UiState};

#[component]
pub fn FinalCta() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="section final-cta">
            <div class="container container--narrow">
                <h2 class="final-cta__title">
                    "The future of media buying is "
                    <span class="gradient-text">"already here."</span>
                </h2>
                <p class="section__lede">
                    "Stop wasting time on manual uploads and bid adjustments. "
                    "Let AdBuy automate your scale so you can build the brand."
                </p>
                <button class="btn btn--light btn--xl" on:click=move |_| navigate_to(ui, Page::Signup)>
                    "Get Started Free →"
                </button>
            </div>
        </section>
    }
}
