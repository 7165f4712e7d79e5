//! Signup page: email + password registration confirmed by a one-time code.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::auth_flow::{launch_demo, mount_flow, submit_code, submit_credentials};
use crate::app::navigate_to;
use crate::components::loading::Spinner;
use crate::components::status_message::StatusBanner;
use crate::net::types::AuthPurpose;
use crate::state::auth::{AuthFlowState, AuthStage, CODE_LEN, sanitize_code_input};
use crate::state::ui::{Page, UiState};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let flow = mount_flow(AuthPurpose::Signup);

    let busy = move || flow.with(|f| f.busy);
    let awaiting_code = move || flow.with(|f| f.stage == AuthStage::AwaitingCode);
    let message = Signal::derive(move || flow.with(|f| f.message.clone()));

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_credentials(flow);
    };
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_code(flow, ui);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <div class="auth-card__head">
                    <h2 class="auth-card__title auth-card__title--lg">
                        {move || if awaiting_code() { "Confirm Email" } else { "Start Scaling." }}
                    </h2>
                    <p class="auth-card__subtitle">
                        {move || {
                            if awaiting_code() {
                                format!("We sent a 6-digit code to {}", flow.with(|f| f.email.clone()))
                            } else {
                                "Create your account and automate your media buying in seconds.".to_owned()
                            }
                        }}
                    </p>
                </div>

                <StatusBanner message=message/>

                <Show
                    when=awaiting_code
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_sign_up>
                                <label class="field">
                                    <span class="field__label">"Email Address"</span>
                                    <input
                                        class="input"
                                        type="email"
                                        required
                                        placeholder="jane@brand.com"
                                        prop:value=move || flow.with(|f| f.email.clone())
                                        on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                                    />
                                </label>
                                <label class="field">
                                    <span class="field__label">"Password"</span>
                                    <input
                                        class="input"
                                        type="password"
                                        required
                                        placeholder="Minimum 6 characters"
                                        prop:value=move || flow.with(|f| f.password.clone())
                                        on:input=move |ev| flow.update(|f| f.password = event_target_value(&ev))
                                    />
                                </label>
                                <button class="btn btn--primary btn--block btn--lg" type="submit" disabled=busy>
                                    {move || if busy() { view! { <Spinner/> }.into_any() } else { "Create Account".into_any() }}
                                </button>
                                <div class="divider"><span>"or"</span></div>
                                <button
                                    class="btn btn--ghost btn--block"
                                    type="button"
                                    disabled=busy
                                    on:click=move |_| launch_demo(flow, ui)
                                >
                                    "🚀 Use Instant Demo"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_verify>
                        <label class="field">
                            <span class="field__label">"Enter Code"</span>
                            <input
                                class="input input--code"
                                type="text"
                                inputmode="numeric"
                                required
                                maxlength=CODE_LEN.to_string()
                                placeholder="123456"
                                prop:value=move || flow.with(|f| f.code.clone())
                                on:input=move |ev| flow.update(|f| f.code = sanitize_code_input(&event_target_value(&ev)))
                            />
                        </label>
                        <button class="btn btn--primary btn--block" type="submit" disabled=busy>
                            {move || if busy() { view! { <Spinner/> }.into_any() } else { "Confirm Account".into_any() }}
                        </button>
                        <button
                            class="btn btn--link btn--block"
                            type="button"
                            on:click=move |_| flow.update(AuthFlowState::back)
                        >
                            "← Edit Info"
                        </button>
                    </form>
                </Show>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <button class="btn--link" on:click=move |_| navigate_to(ui, Page::Login)>
                        "Log in"
                    </button>
                </p>
            </div>
        </div>
    }
}
