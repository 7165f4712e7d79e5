//! Login page: email one-time code, with a demo shortcut.

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
pub fn LoginPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let flow = mount_flow(AuthPurpose::Login);

    let busy = move || flow.with(|f| f.busy);
    let awaiting_code = move || flow.with(|f| f.stage == AuthStage::AwaitingCode);
    let message = Signal::derive(move || flow.with(|f| f.message.clone()));

    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_credentials(flow);
    };
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_code(flow, ui);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__head">
                    <div class="brand__mark brand__mark--lg">"A"</div>
                    <h2 class="auth-card__title">
                        {move || if awaiting_code() { "Verify Account" } else { "Welcome Back" }}
                    </h2>
                    <p class="auth-card__subtitle">
                        {move || {
                            if awaiting_code() {
                                format!("Enter the code sent to {}", flow.with(|f| f.email.clone()))
                            } else {
                                "Scale your brand with AI precision".to_owned()
                            }
                        }}
                    </p>
                </div>

                <StatusBanner message=message/>

                <Show
                    when=awaiting_code
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_request>
                                <label class="field">
                                    <span class="field__label">"Work Email"</span>
                                    <input
                                        class="input"
                                        type="email"
                                        required
                                        placeholder="name@company.com"
                                        prop:value=move || flow.with(|f| f.email.clone())
                                        on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                                    />
                                </label>
                                <button class="btn btn--primary btn--block" type="submit" disabled=busy>
                                    {move || if busy() { view! { <Spinner/> }.into_any() } else { "Send Magic Link".into_any() }}
                                </button>
                                <div class="divider"><span>"or"</span></div>
                                <button
                                    class="btn btn--ghost btn--block"
                                    type="button"
                                    disabled=busy
                                    on:click=move |_| launch_demo(flow, ui)
                                >
                                    "🚀 Launch Demo Dashboard"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_verify>
                        <label class="field">
                            <span class="field__label">"Verification Code"</span>
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
                            {move || if busy() { view! { <Spinner/> }.into_any() } else { "Verify Code".into_any() }}
                        </button>
                        <button
                            class="btn btn--link btn--block"
                            type="button"
                            on:click=move |_| flow.update(AuthFlowState::back)
                        >
                            "← Back to Email"
                        </button>
                    </form>
                </Show>

                <p class="auth-card__switch">
                    "New to AdBuy? "
                    <button class="btn--link" on:click=move |_| navigate_to(ui, Page::Signup)>
                        "Create an account"
                    </button>
                </p>
            </div>
        </div>
    }
}
