//! Pricing tiers with a monthly/yearly billing toggle.
//!
//! Yearly prices are the per-month rate when billed annually. Enterprise is
//! quoted on request and has no list price in either cycle.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

use crate::state::ui::Section;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug)]
pub struct Tier {
    pub name: &'static str,
    /// `(monthly, yearly)` USD per month. `None` means custom pricing.
    pub prices: Option<(u32, u32)>,
    pub desc: &'static str,
    pub features: &'static [&'static str],
    pub button: &'static str,
    pub highlight: bool,
}

pub static TIERS: [Tier; 3] = [
    Tier {
        name: "Starter",
        prices: Some((49, 39)),
        desc: "Ideal for independent sellers and small boutiques.",
        features: &["Up to $5k Monthly Spend", "AI Creative Generator (10/mo)", "Automated Media Planner", "Email Support"],
        button: "Start Free Trial",
        highlight: false,
    },
    Tier {
        name: "Pro",
        prices: Some((199, 159)),
        desc: "For aggressive brands scaling across channels.",
        features: &[
            "Up to $50k Monthly Spend",
            "Predictive Bidding Engine",
            "Advanced ROI Insights",
            "Priority 24/7 Support",
            "Unlimited AI Creatives",
        ],
        button: "Scale with Pro",
        highlight: true,
    },
    Tier {
        name: "Enterprise",
        prices: None,
        desc: "Custom solutions for high-volume agencies.",
        features: &[
            "Unlimited Ad Spend",
            "Custom Model Training",
            "Full API Access",
            "Account Strategist",
            "White-labeled Reports",
        ],
        button: "Contact Sales",
        highlight: false,
    },
];

#[must_use]
pub fn tier_price(tier: &Tier, cycle: BillingCycle) -> Option<u32> {
    tier.prices.map(|(monthly, yearly)| match cycle {
        BillingCycle::Monthly => monthly,
        BillingCycle::Yearly => yearly,
    })
}

/// Display string for the big price figure.
#[must_use]
pub fn price_label(tier: &Tier, cycle: BillingCycle) -> String {
    tier_price(tier, cycle).map_or_else(|| "Custom".to_owned(), |p| format!("${p}"))
}

#[component]
pub fn Pricing() -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::Monthly);

    let toggle_class = move |c: BillingCycle| {
        if cycle.get() == c { "billing__option billing__option--active" } else { "billing__option" }
    };

    view! {
        <section id=Section::Pricing.anchor() class="section pricing">
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title">"Ready to Scale?"</h2>
                    <div class="billing">
                        <button
                            class=move || toggle_class(BillingCycle::Monthly)
                            on:click=move |_| cycle.set(BillingCycle::Monthly)
                        >
                            "Monthly"
                        </button>
                        <button
                            class=move || toggle_class(BillingCycle::Yearly)
                            on:click=move |_| cycle.set(BillingCycle::Yearly)
                        >
                            "Yearly " <span class="billing__save">"Save 20%"</span>
                        </button>
                    </div>
                </div>
                <div class="pricing__grid">
                    {TIERS
                        .iter()
                        .map(|tier| {
                            let card_class = if tier.highlight { "tier tier--highlight" } else { "tier" };
                            view! {
                                <div class=card_class>
                                    {tier.highlight.then(|| view! { <div class="tier__badge">"Most Popular"</div> })}
                                    <div class="tier__head">
                                        <h3 class="tier__name">{tier.name}</h3>
                                        <p class="tier__desc">{tier.desc}</p>
                                    </div>
                                    <div class="tier__price">
                                        <span class="tier__amount">{move || price_label(tier, cycle.get())}</span>
                                        {tier.prices.is_some().then(|| view! { <span class="tier__per">"/mo"</span> })}
                                    </div>
                                    <ul class="tier__features">
                                        {tier
                                            .features
                                            .iter()
                                            .map(|f| view! { <li><span class="check">"✓"</span>{*f}</li> })
                                            .collect_view()}
                                    </ul>
                                    <button class=if tier.highlight { "btn btn--primary btn--block" } else { "btn btn--ghost btn--block" }>
                                        {tier.button}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
