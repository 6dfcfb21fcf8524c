//! Todo Creation Form Component

use leptos::prelude::*;

use quicklist_core::{NewTodo, TodoDraft};

/// Title + description form. Submits only with a non-empty title, then clears.
#[component]
pub fn TodoForm(#[prop(into)] on_create: Callback<NewTodo>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut draft = TodoDraft {
            title: title.get(),
            description: description.get(),
        };
        if let Some(new_todo) = draft.take() {
            on_create.run(new_todo);
            set_title.set(draft.title);
            set_description.set(draft.description);
        }
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="New to-do title"
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add To-Do"</button>
        </form>
    }
}
