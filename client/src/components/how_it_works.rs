//! Three-step "AdBuy Engine" walkthrough.

use leptos::prelude::*;

struct Step {
    num: &'static str,
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        num: "01",
        title: "Connect Channels",
        desc: "Securely link your Meta, Google, and TikTok accounts. Our AI begins analyzing your historical data instantly to find untapped opportunities.",
        icon: "⛓",
    },
    Step {
        num: "02",
        title: "Define Objectives",
        desc: "Set your target ROAS, CPA thresholds, and daily limits. AdBuy's brain translates your business goals into granular bidding and budget strategies.",
        icon: "▥",
    },
    Step {
        num: "03",
        title: "Autopilot Scaling",
        desc: "Sit back as the AI works 24/7. It shifts budget from failing ads to winners, refreshes creative, and scales your winners to new heights.",
        icon: "✦",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section how">
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title">"The AdBuy Engine"</h2>
                    <p class="section__lede">
                        "Traditional media buying is reactive. Our engine is proactive, managing millions of data "
                        "points every second to ensure your ROAS never dips."
                    </p>
                </div>
                <div class="how__steps">
                    {STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="step">
                                    <div class="step__head">
                                        <div class="icon-tile icon-tile--lg">{step.icon}</div>
                                        <span class="step__num">{step.num}</span>
                                    </div>
                                    <h3 class="step__title">{step.title}</h3>
                                    <p class="step__desc">{step.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
