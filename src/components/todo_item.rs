//! Todo Item Component
//!
//! A single to-do. Double-click asks for confirmation inline; confirming
//! fires the delete callback once.

use leptos::prelude::*;

use quicklist_core::Todo;

use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoItem(todo: Todo, #[prop(into)] on_delete: Callback<i64>) -> impl IntoView {
    let store = use_todo_store();
    let id = todo.id;
    let confirming = move || store.confirming_delete().get() == Some(id);

    view! {
        <li
            class="todo-item"
            class:confirming=confirming
            title="Double-click to delete"
            on:dblclick=move |_| store.confirming_delete().set(Some(id))
        >
            <div class="todo-content">
                <h3 class="todo-title">{todo.title}</h3>
                <p class="todo-description">{todo.description}</p>
            </div>
            <Show when=confirming>
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete this to-do?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store.confirming_delete().set(None);
                            on_delete.run(id);
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store.confirming_delete().set(None);
                        }
                    >
                        "✗"
                    </button>
                </span>
            </Show>
        </li>
    }
}
