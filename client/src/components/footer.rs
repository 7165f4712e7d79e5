//! Site footer.

use leptos::prelude::*;

const COLUMNS: [(&str, &[&str]); 3] = [
    ("Product", &["Media Planner", "Creative Lab", "Predictive Bidding", "ROI Analytics"]),
    ("Support", &["Help Center", "API Docs", "Status", "Contact"]),
    ("Legal", &["Privacy", "Terms", "Security"]),
];

const SOCIAL: [&str; 3] = ["Twitter", "LinkedIn", "Instagram"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer__grid">
                    <div>
                        <div class="brand brand--small">
                            <span class="brand__mark">"A"</span>
                            <span class="brand__name">"AdBuy" <span class="accent">".ai"</span></span>
                        </div>
                        <p class="footer__blurb">
                            "The world's most powerful AI platform for automated media buying. Scale your brand to the moon."
                        </p>
                    </div>
                    {COLUMNS
                        .into_iter()
                        .map(|(heading, links)| {
                            view! {
                                <div>
                                    <h4 class="footer__heading">{heading}</h4>
                                    <ul class="footer__links">
                                        {links.iter().map(|l| view! { <li><a href="#">{*l}</a></li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="footer__bottom">
                    <p>"© 2025 AdBuy AI Technology Inc. All rights reserved."</p>
                    <div class="footer__social">
                        {SOCIAL.into_iter().map(|s| view! { <a href="#">{s}</a> }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
