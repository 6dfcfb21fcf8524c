//! Todo List View Component
//!
//! Loads the signed-in user's to-dos on mount and on every token change.
//! Create and delete go to the backend first, then the whole list is
//! fetched again.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::debug;

use quicklist_core::{todos, NewTodo};

use crate::components::{TodoForm, TodoItem};
use crate::context::use_session;
use crate::store::{store_apply, TodoState, TodoStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let session = use_session();
    let store = Store::new(TodoState::default());
    provide_context(store);

    Effect::new(move |_| {
        let Some(token) = session.token.get() else {
            return;
        };
        let api = session.api();
        debug!("fetching todos");
        spawn_local(async move {
            let result = todos::refresh(&api, &token).await;
            store_apply(&store, &session, result);
        });
    });

    let create = Callback::new(move |new_todo: NewTodo| {
        let Some(token) = session.token.get_untracked() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let result = todos::create_then_refresh(&api, &token, &new_todo).await;
            store_apply(&store, &session, result);
        });
    });

    let delete = Callback::new(move |id: i64| {
        let Some(token) = session.token.get_untracked() else {
            return;
        };
        let api = session.api();
        spawn_local(async move {
            let result = todos::delete_then_refresh(&api, &token, id).await;
            store_apply(&store, &session, result);
        });
    });

    view! {
        <div class="todos">
            <h2>"Your To-Dos"</h2>
            {move || store.list().get().error.map(|message| view! {
                <p class="list-error">{message}</p>
            })}
            <ul class="todo-list">
                <For
                    each=move || store.list().get().items
                    key=|todo| (todo.id, todo.title.clone(), todo.description.clone(), todo.is_completed)
                    children=move |todo| view! { <TodoItem todo=todo on_delete=delete /> }
                />
            </ul>
            <p class="item-count">{move || item_count(store.list().get().len())}</p>
            <TodoForm on_create=create />
        </div>
    }
}

fn item_count(n: usize) -> String {
    if n == 1 {
        "1 to-do".to_string()
    } else {
        format!("{} to-dos", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_singular_for_one() {
        assert_eq!(item_count(0), "0 to-dos");
        assert_eq!(item_count(1), "1 to-do");
        assert_eq!(item_count(2), "2 to-dos");
    }
}
