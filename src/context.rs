//! Session Context
//!
//! The signed-in state, provided via Leptos Context API by the root
//! component and injected into whatever needs the token or the API client.

use leptos::prelude::*;
use tracing::info;

use quicklist_core::{todos, ApiClient, ApiResult, ClientConfig, Session, Todo, TodoList};

use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current token - read. `None` means signed out.
    pub token: ReadSignal<Option<String>>,
    /// Current token - write
    set_token: WriteSignal<Option<String>>,
    session: StoredValue<Session<BrowserStorage>>,
    api: StoredValue<ApiClient>,
}

impl SessionContext {
    /// Hydrate from `localStorage` and build the API client
    pub fn new(config: &ClientConfig) -> Self {
        let session = Session::hydrate(BrowserStorage::new(config.token_key.clone()));
        let (token, set_token) = signal(session.token().map(str::to_string));
        Self {
            token,
            set_token,
            session: StoredValue::new(session),
            api: StoredValue::new(ApiClient::new(config)),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn sign_in(&self, token: String) {
        // A failed write is logged by the session; memory still updates
        self.session.update_value(|s| {
            let _ = s.set_token(token.clone());
        });
        self.set_token.set(Some(token));
        info!("signed in");
    }

    pub fn sign_out(&self) {
        self.session.update_value(|s| {
            let _ = s.clear_token();
        });
        self.set_token.set(None);
        info!("signed out");
    }

    /// Settle a to-do result against the stored session. Returns true when
    /// that ended the session; the caller then calls `mark_signed_out`
    /// once it holds no store guards.
    pub fn settle(&self, list: &mut TodoList, result: ApiResult<Vec<Todo>>) -> bool {
        let mut ended = false;
        self.session.update_value(|s| {
            let _ = todos::settle(list, s, result);
            ended = !s.is_authenticated();
        });
        ended && self.token.with_untracked(Option::is_some)
    }

    /// Mirror an already-cleared session into the token signal
    pub fn mark_signed_out(&self) {
        self.set_token.set(None);
        info!("signed out");
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
