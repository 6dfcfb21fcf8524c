//! Auth Form Components
//!
//! Login and registration forms. Both post credentials and hand the issued
//! token to a success callback; the root component reacts to the session
//! change, the form never navigates itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use quicklist_core::{authenticate, AuthMode, Credentials};

use crate::context::use_session;

/// Shared email/password form for either auth mode
#[component]
pub fn AuthForm(
    mode: AuthMode,
    #[prop(into)] on_success: Callback<String>,
    #[prop(into)] on_switch: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        let credentials = Credentials::new(email.get(), password.get());
        let api = session.api();

        spawn_local(async move {
            match authenticate(&api, mode, &credentials).await {
                Ok(token) => on_success.run(token),
                Err(message) => set_error.set(message),
            }
        });
    };

    let (prompt, switch_label) = match mode {
        AuthMode::Login => ("Don't have an account? ", "Sign up here."),
        AuthMode::Register => ("Already have an account? ", "Log in here."),
    };

    view! {
        <div class="card">
            <h2>{mode.title()}</h2>
            <form on:submit=submit>
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">{mode.submit_label()}</button>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
            </form>
            <p class="auth-switch">
                {prompt}
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_switch.run(());
                    }
                >
                    {switch_label}
                </a>
            </p>
        </div>
    }
}

#[component]
pub fn LoginForm(
    #[prop(into)] on_login_success: Callback<String>,
    #[prop(into)] on_show_register: Callback<()>,
) -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Login on_success=on_login_success on_switch=on_show_register /> }
}

#[component]
pub fn RegisterForm(
    #[prop(into)] on_register_success: Callback<String>,
    #[prop(into)] on_show_login: Callback<()>,
) -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Register on_success=on_register_success on_switch=on_show_login /> }
}
