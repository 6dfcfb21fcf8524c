//! To-do View State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store per
//! mounted list view; it goes away on sign-out together with the view.

use leptos::prelude::*;
use reactive_stores::Store;

use quicklist_core::{ApiResult, Todo, TodoList};

use crate::context::SessionContext;

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Server list as last fetched, plus the last failure message
    pub list: TodoList,
    /// Item whose delete confirmation is showing
    pub confirming_delete: Option<i64>,
}

pub type TodoStore = Store<TodoState>;

pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Apply a fetch result to the store; a 401 ends the session.
pub fn store_apply(store: &TodoStore, session: &SessionContext, result: ApiResult<Vec<Todo>>) {
    let list_field = store.list();
    // The view may have been unmounted while the request was in flight
    let Some(mut list) = list_field.try_write() else {
        return;
    };
    let ended = session.settle(&mut list, result);
    drop(list);

    if ended {
        session.mark_signed_out();
    }
}
