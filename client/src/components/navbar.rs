//! Fixed top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only global chrome besides the footer. Page buttons replace the
//! current page; section anchors return to the landing page and scroll the
//! section into view.

use leptos::prelude::*;

use crate::app::{navigate_to, show_section};
use crate::state::ui::{Page, Section, UiState};
use crate::util::dark_mode;

/// Scroll offset past which the bar switches to its solid style.
#[cfg(feature = "hydrate")]
const SCROLLED_AFTER_PX: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or(0.0);
            scrolled.set(y > SCROLLED_AFTER_PX);
        });
    }

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" }>
            <div class="navbar__inner">
                <button class="brand" on:click=move |_| navigate_to(ui, Page::Landing)>
                    <span class="brand__mark">"A"</span>
                    <span class="brand__name">"AdBuy" <span class="accent">".ai"</span></span>
                </button>

                <div class="navbar__links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=format!("#{}", section.anchor())
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        show_section(ui, section);
                                    }
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar__actions">
                    <button
                        class="navbar__theme"
                        title="Toggle dark mode"
                        on:click=on_toggle_dark
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button class="navbar__login" on:click=move |_| navigate_to(ui, Page::Login)>
                        "Log in"
                    </button>
                    <button class="btn btn--light btn--pill" on:click=move |_| navigate_to(ui, Page::Signup)>
                        "Get Started"
                    </button>
                </div>
            </div>
            <Show when=move || ui.get().notice.is_some()>
                <div class="navbar__notice">
                    <span>{move || ui.get().notice.unwrap_or_default()}</span>
                    <button on:click=move |_| ui.update(|u| u.notice = None)>"Dismiss"</button>
                </div>
            </Show>
        </nav>
    }
}
