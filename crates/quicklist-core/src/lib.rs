//! QuickList Core
//!
//! Everything the frontend does that is not rendering:
//! - config: API base URL and storage key
//! - models: wire types shared with the backend
//! - client: HTTP bindings to the backend endpoints
//! - session: token holder backed by durable storage
//! - auth / todos: the flows the forms and list view drive

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod todos;


pub use auth::{authenticate, AuthMode, Screen};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, StorageError};
pub use models::{AccessToken, Credentials, NewTodo, Todo};
pub use session::{MemoryStorage, Session, TokenStorage};
pub use todos::{settle, TodoDraft, TodoList};
