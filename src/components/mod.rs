//! UI Components
//!
//! Leptos components for the auth forms and the to-do view.

mod auth_form;
mod todo_form;
mod todo_item;
mod todo_list;

pub use auth_form::{LoginForm, RegisterForm};
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoListView;
