//! Auth Flows
//!
//! Login and registration share one contract: send credentials, get back a
//! token or a message to show under the form.

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::models::Credentials;

/// Which auth form is showing while logged out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log In",
            AuthMode::Register => "Sign Up",
        }
    }

    /// Shown when the server rejects without a `detail`
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed. Please check your credentials.",
            AuthMode::Register => "Registration failed.",
        }
    }
}

/// Top-level screen, derived from token presence and the auth toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Todos,
    Auth(AuthMode),
}

impl Screen {
    pub fn select(has_token: bool, mode: AuthMode) -> Self {
        if has_token {
            Screen::Todos
        } else {
            Screen::Auth(mode)
        }
    }
}

/// Run one login or registration request.
///
/// Returns the issued token, or the text the form should display.
pub async fn authenticate(api: &ApiClient, mode: AuthMode, credentials: &Credentials) -> Result<String, String> {
    let result = match mode {
        AuthMode::Login => api.login(credentials).await,
        AuthMode::Register => api.register(credentials).await,
    };
    match result {
        Ok(token) => {
            info!(mode = mode.title(), "authenticated");
            Ok(token)
        }
        Err(e) => {
            warn!(mode = mode.title(), error = %e, "authentication failed");
            Err(e.user_message(mode.fallback_message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence_gates_todo_screen() {
        assert_eq!(Screen::select(true, AuthMode::Register), Screen::Todos);
        assert_eq!(Screen::select(false, AuthMode::Login), Screen::Auth(AuthMode::Login));
        assert_eq!(Screen::select(false, AuthMode::Register), Screen::Auth(AuthMode::Register));
    }

    #[test]
    fn login_is_the_default_mode() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
    }
}
