//! Creative Studio: text prompt in, generated ad image out.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::widget::submit_widget;
use crate::state::demo::{CREATIVE_FAILED, WidgetState};
use crate::state::ui::Section;

#[component]
pub fn CreativeLab(#[prop(into)] activated: Signal<bool>, on_activate: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(WidgetState::<String>::new(CREATIVE_FAILED));
    let loading = move || state.with(|s| s.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_widget(state, activated.get_untracked(), on_activate, "creative generation", |prompt| async move {
            crate::net::api::generate_creative(&prompt).await
        });
    };

    view! {
        <section id=Section::CreativeLab.anchor() class="section creative">
            <div class="container split">
                <div>
                    <h2 class="section__title">"Creative " <br/> <span class="accent">"Studio."</span></h2>
                    <p class="section__lede">
                        "Don't let design bottlenecks slow your scale. Generate high-fidelity, high-performance "
                        "ad creatives in seconds using our proprietary vision models."
                    </p>
                    <form class="widget-form" on:submit=on_submit>
                        <textarea
                            class="input input--area"
                            placeholder="e.g. A hyper-realistic 3D render of a futuristic luxury watch on a dark background, neon blue lighting, cinematic bokeh..."
                            prop:value=move || state.with(|s| s.input.clone())
                            on:input=move |ev| state.update(|s| s.input = event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary btn--block btn--lg" type="submit" disabled=loading>
                            {move || if loading() { "Rendering Masterpiece..." } else { "Generate Creative" }}
                        </button>
                    </form>
                    {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="widget-error" role="alert">{e}</p> })}
                </div>
                <div class="creative__canvas">
                    {move || match state.with(|s| s.result.clone()) {
                        Some(src) => view! { <img class="creative__image" src=src alt="Generated Ad"/> }.into_any(),
                        None => view! {
                            <div class="creative__placeholder">
                                <div class="icon-tile icon-tile--lg">"▣"</div>
                                <p>"Your AI-generated creative will materialize here."</p>
                            </div>
                        }
                        .into_any(),
                    }}
                    <Show when=loading>
                        <div class="creative__overlay">
                            <span class="spinner spinner--lg"></span>
                            <p class="creative__overlay-title">"AI Drafting..."</p>
                            <p class="creative__overlay-sub">"Computing performance-optimized pixels"</p>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
