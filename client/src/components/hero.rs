//! Landing-page hero with the primary call to action.

use leptos::prelude::*;

use crate::app::navigate_to;
use crate::state::ui::{Page, UiState};

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="hero">
            <div class="hero__grid"></div>
            <div class="container hero__content">
                <div class="eyebrow">
                    <span class="eyebrow__dot"></span>
                    "Next-Gen Performance Marketing"
                </div>
                <h1 class="hero__title">
                    "Media buying " <br/>
                    <span class="gradient-text">"on autopilot."</span>
                </h1>
                <p class="hero__lede">
                    "AdBuy.ai is the world's first advertising OS powered by Gemini 3. "
                    "Automated bidding, cross-channel budget shifting, and creative testing at scale."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary btn--xl" on:click=move |_| navigate_to(ui, Page::Signup)>
                        "Start Scaling Free →"
                    </button>
                    <button class="btn btn--ghost btn--xl">"Book a Demo"</button>
                </div>
                <DashboardPreview/>
            </div>
        </section>
    }
}

/// Decorative mock of the product dashboard.
#[component]
fn DashboardPreview() -> impl IntoView {
    view! {
        <div class="preview">
            <div class="preview__frame">
                <div class="preview__bar">
                    <div class="preview__lights">
                        <span class="light light--red"></span>
                        <span class="light light--yellow"></span>
                        <span class="light light--green"></span>
                    </div>
                    <div class="preview__search"></div>
                </div>
                <div class="preview__body">
                    <div class="preview__sidebar">
                        <div class="preview__nav preview__nav--active"></div>
                        {(0..4).map(|_| view! { <div class="preview__nav"></div> }).collect_view()}
                    </div>
                    <div class="preview__main">
                        <div class="preview__cards">
                            {(0..3).map(|_| view! { <div class="preview__card"></div> }).collect_view()}
                        </div>
                        <div class="preview__chart">
                            <div class="preview__orbit"></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
