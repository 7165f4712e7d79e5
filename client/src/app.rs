//! Root application component with context providers and the page switch.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::activation_prompt::ActivationPrompt;
use crate::components::footer::Footer;
use crate::components::loading::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::pages::{landing::LandingPage, login::LoginPage, signup::SignupPage};
use crate::state::ui::{KeyGate, Page, RootView, Section, UiState};
use crate::util::key_host::KeyHostHandle;
use crate::util::{dark_mode, scroll};

/// Shown when a widget needs a key but no host can provide one.
pub const AI_NOT_CONFIGURED: &str = "The AI demo is not configured on this server yet.";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class={dark_mode::root_class(dark_mode::DEFAULT_DARK)}>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and key-gate contexts and mounts the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(KeyGate::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/adbuy.css"/>
        <Title text="AdBuy.ai | Media buying on autopilot"/>
        <Meta name="description" content="AI media buying: automated bidding, budget shifting, and creative testing at scale."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Site/>
            </Routes>
        </Router>
    }
}

/// Navbar, the gated main area, and the footer.
#[component]
fn Site() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let gate = expect_context::<RwSignal<KeyGate>>();
    let host = use_context::<KeyHostHandle>().unwrap_or_default();
    let activating = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let host = host.clone();
        Effect::new(move |_| {
            let dark = dark_mode::read_preference();
            dark_mode::apply(dark);
            ui.update(|u| u.dark_mode = dark);

            gate.update(|g| g.host_present = host.is_present());
            let bridge = host.host();
            leptos::task::spawn_local(async move {
                let fallback = async {
                    match crate::net::api::fetch_config().await {
                        Ok(config) => config.ai_configured,
                        Err(e) => {
                            log::warn!("config fetch failed: {e}");
                            false
                        }
                    }
                };
                let status = crate::util::key_host::resolve_status(bridge.as_deref(), fallback).await;
                gate.update(|g| g.status = status);
            });
        });
    }

    let on_activate = Callback::new(move |()| {
        let Some(bridge) = host.host() else {
            ui.update(|u| u.notice = Some(AI_NOT_CONFIGURED.to_owned()));
            return;
        };
        if activating.get_untracked() {
            return;
        }
        activating.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(status) = crate::util::key_host::activate(Some(&*bridge)).await {
                gate.update(|g| g.status = status);
            }
            activating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = bridge;
            activating.set(false);
        }
    });

    let activated = Signal::derive(move || gate.with(|g| g.widgets_activated()));
    let root_view = Memo::new(move |_| gate.with(|g| g.view()));
    let page = Memo::new(move |_| ui.with(|u| u.page));

    view! {
        <div class="site">
            <Navbar/>
            <main>
                {move || match root_view.get() {
                    RootView::Loading => view! { <LoadingScreen/> }.into_any(),
                    RootView::Activation => view! { <ActivationPrompt busy=activating on_activate=on_activate/> }.into_any(),
                    RootView::Content => match page.get() {
                        Page::Landing => view! { <LandingPage activated=activated on_activate=on_activate/> }.into_any(),
                        Page::Login => view! { <LoginPage/> }.into_any(),
                        Page::Signup => view! { <SignupPage/> }.into_any(),
                    },
                }}
            </main>
            <Footer/>
        </div>
    }
}

/// Replace the current page and jump to the top.
pub fn navigate_to(ui: RwSignal<UiState>, page: Page) {
    ui.update(|u| {
        u.navigate(page);
    });
    scroll::scroll_to_top();
}

/// Return to the landing page and bring a section into view.
pub fn show_section(ui: RwSignal<UiState>, section: Section) {
    ui.update(|u| {
        u.navigate(Page::Landing);
    });
    scroll::scroll_to_section(section.anchor());
}
