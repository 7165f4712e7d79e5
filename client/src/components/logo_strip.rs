//! Row of ad-platform names under the hero.

#[cfg(test)]
#[path = "logo_strip_test.rs"]
mod logo_strip_test;

use leptos::prelude::*;

pub const PLATFORMS: [&str; 5] = ["Meta", "Google", "TikTok", "Snapchat", "YouTube"];

/// First letter of a platform name, used as its badge.
fn monogram(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[component]
pub fn LogoStrip() -> impl IntoView {
    view! {
        <div class="logo-strip">
            <div class="container">
                <p class="logo-strip__caption">"Leading media buyers automate with AdBuy"</p>
                <div class="logo-strip__row">
                    {PLATFORMS
                        .into_iter()
                        .map(|name| {
                            view! {
                                <div class="logo-strip__item">
                                    <span class="logo-strip__badge">{monogram(name)}</span>
                                    {name}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
