//! Landing page: marketing sections plus the two AI demo widgets.

use leptos::prelude::*;

use crate::components::creative_lab::CreativeLab;
use crate::components::features::Features;
use crate::components::final_cta::FinalCta;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::logo_strip::LogoStrip;
use crate::components::pricing::Pricing;
use crate::components::strategy_generator::StrategyGenerator;

#[component]
pub fn LandingPage(#[prop(into)] activated: Signal<bool>, on_activate: Callback<()>) -> impl IntoView {
    view! {
        <div class="landing">
            <Hero/>
            <LogoStrip/>
            <Features/>
            <HowItWorks/>
            <div class="separator"></div>
            <CreativeLab activated=activated on_activate=on_activate/>
            <StrategyGenerator activated=activated on_activate=on_activate/>
            <Pricing/>
            <FinalCta/>
        </div>
    }
}
