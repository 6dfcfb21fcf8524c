//! QuickList App
//!
//! Root component: owns the session context and picks the screen from it.

use leptos::prelude::*;

use quicklist_core::{AuthMode, ClientConfig, Screen};

use crate::components::{LoginForm, RegisterForm, TodoListView};
use crate::context::SessionContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let session = SessionContext::new(&config);
    provide_context(session);

    // Which auth form shows while signed out
    let (auth_mode, set_auth_mode) = signal(AuthMode::Login);

    // Memo so a token swap alone does not remount the list view
    let screen = Memo::new(move |_| Screen::select(session.is_signed_in(), auth_mode.get()));

    // Owned by the root so it outlives a form swapped out mid-request
    let on_auth_success = Callback::new(move |token: String| session.sign_in(token));

    view! {
        <div class="container">
            {move || match screen.get() {
                Screen::Todos => view! {
                    <div class="toolbar">
                        <button on:click=move |_| session.sign_out()>"Log Out"</button>
                    </div>
                    <TodoListView />
                }
                .into_any(),
                Screen::Auth(AuthMode::Login) => view! {
                    <LoginForm
                        on_login_success=on_auth_success
                        on_show_register=move |_| set_auth_mode.set(AuthMode::Register)
                    />
                }
                .into_any(),
                Screen::Auth(AuthMode::Register) => view! {
                    <RegisterForm
                        on_register_success=on_auth_success
                        on_show_login=move |_| set_auth_mode.set(AuthMode::Login)
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    #[test]
    fn root_callback_outlives_swapped_out_form() {
        let root = Owner::new();
        root.set();
        let (token, set_token) = signal(None::<String>);
        let on_auth_success = Callback::new(move |t: String| set_token.set(Some(t)));

        // The form arm is torn down while its login request is in flight
        let form_arm = root.child();
        let held = form_arm.with(|| on_auth_success);
        form_arm.cleanup();

        held.run("abc".to_string());
        assert_eq!(token.get_untracked().as_deref(), Some("abc"));
    }
}
