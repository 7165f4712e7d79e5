//! "Scale without the heavy lifting" feature list.

use leptos::prelude::*;

use crate::state::ui::Section;

struct Feature {
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Predictive AI Bidding",
        desc: "Stop manually tweaking bids. Our models predict conversion likelihood in real-time to win the best inventory.",
        icon: "↗",
    },
    Feature {
        title: "Creative Analysis",
        desc: "Automatically tag and analyze creative performance. Know exactly which visual elements drive ROI.",
        icon: "◉",
    },
    Feature {
        title: "Auto-Budget Allocation",
        desc: "Scale winners and cut losers across accounts instantly. Shift budget from TikTok to Meta based on real-time ROAS.",
        icon: "$",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=Section::Features.anchor() class="section features">
            <div class="container split">
                <div>
                    <h2 class="section__title">
                        "Scale without the " <br/>
                        <span class="accent">"heavy lifting."</span>
                    </h2>
                    <p class="section__lede">
                        "Traditional media buying is slow, manual, and reactive. AdBuy.ai transforms your workflow "
                        "with proactive AI that manages the technical complexity while you focus on brand strategy."
                    </p>
                    <div class="features__list">
                        {FEATURES
                            .iter()
                            .map(|f| {
                                view! {
                                    <div class="feature">
                                        <div class="icon-tile">{f.icon}</div>
                                        <div>
                                            <h4 class="feature__title">{f.title}</h4>
                                            <p class="feature__desc">{f.desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="features__art">
                    <div class="features__panel">
                        <div class="bar bar--75"></div>
                        <div class="bar bar--100"></div>
                        <div class="bar bar--50"></div>
                        <div class="features__tiles">
                            <div class="tile tile--blue"></div>
                            <div class="tile tile--purple"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
