//! Strategy Generator: product description in, structured media plan out.

#[cfg(test)]
#[path = "strategy_generator_test.rs"]
mod strategy_generator_test;

use leptos::prelude::*;

use super::widget::submit_widget;
use crate::net::types::AdStrategy;
use crate::state::demo::{STRATEGY_FAILED, WidgetState};
use crate::state::ui::Section;

/// Shown when the model omits a ROAS projection.
pub const DEFAULT_ROAS_PROJECTION: &str = "+42.8%";

#[must_use]
pub fn roas_label(strategy: &AdStrategy) -> &str {
    strategy.roas_projection.as_deref().filter(|r| !r.trim().is_empty()).unwrap_or(DEFAULT_ROAS_PROJECTION)
}

#[component]
pub fn StrategyGenerator(#[prop(into)] activated: Signal<bool>, on_activate: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(WidgetState::<AdStrategy>::new(STRATEGY_FAILED));
    let loading = move || state.with(|s| s.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_widget(state, activated.get_untracked(), on_activate, "strategy generation", |product| async move {
            crate::net::api::generate_strategy(&product).await
        });
    };

    view! {
        <section id=Section::Generator.anchor() class="section strategy">
            <div class="container container--mid">
                <div class="strategy__panel">
                    <div class="section__header">
                        <h2 class="section__title">"Strategy Generator"</h2>
                        <p class="section__lede">
                            "Experience the precision of AdBuy.ai. Describe your product or brand to see our AI "
                            "build a high-converting media plan."
                        </p>
                    </div>
                    <form class="strategy__form" on:submit=on_submit>
                        <input
                            class="input"
                            type="text"
                            placeholder="e.g., A premium D2C skincare brand targeting Gen Z in Europe..."
                            prop:value=move || state.with(|s| s.input.clone())
                            on:input=move |ev| state.update(|s| s.input = event_target_value(&ev))
                        />
                        <button class="btn btn--primary btn--lg" type="submit" disabled=loading>
                            {move || if loading() { "Analyzing..." } else { "Generate Strategy" }}
                        </button>
                    </form>
                    {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="widget-error" role="alert">{e}</p> })}
                    {move || state.with(|s| s.result.clone()).map(|strategy| view! { <StrategyCard strategy=strategy/> })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StrategyCard(strategy: AdStrategy) -> impl IntoView {
    let roas = roas_label(&strategy).to_owned();
    let AdStrategy { headline, target_audience, channels, suggested_budget, creative_hook, primary_pain_point, .. } =
        strategy;

    view! {
        <div class="strategy__result">
            <div class="strategy__col">
                <div>
                    <h3 class="label label--blue">"Core Message"</h3>
                    <p class="strategy__headline">{headline}</p>
                </div>
                <div>
                    <h3 class="label label--blue">"Targeting Segments"</h3>
                    <p class="strategy__text">{target_audience}</p>
                </div>
                <div>
                    <h3 class="label label--blue">"Omnichannel Mix"</h3>
                    <div class="chips">
                        {channels.into_iter().map(|ch| view! { <span class="chip">{ch}</span> }).collect_view()}
                    </div>
                </div>
                {primary_pain_point.map(|pain| {
                    view! {
                        <div>
                            <h3 class="label label--blue">"Primary Pain Point"</h3>
                            <p class="strategy__text">{pain}</p>
                        </div>
                    }
                })}
            </div>
            <div class="strategy__col strategy__col--dark">
                <div>
                    <h3 class="label label--green">"Allocation Strategy"</h3>
                    <p class="strategy__budget">{suggested_budget}</p>
                </div>
                <div>
                    <h3 class="label label--purple">"Viral Creative Hook"</h3>
                    <p class="strategy__hook">"\u{201c}" {creative_hook} "\u{201d}"</p>
                </div>
                <div class="strategy__roas">
                    <div class="icon-tile">"↗"</div>
                    <div>
                        <p class="label">"Est. ROAS Lift"</p>
                        <p class="strategy__roas-value">{roas}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
