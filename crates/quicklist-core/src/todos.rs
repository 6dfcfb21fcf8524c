//! To-do Flows
//!
//! The list is always the server's list: every mutation is followed by a
//! full re-fetch instead of a local patch.

use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo};
use crate::session::{Session, TokenStorage};

/// Contents of the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
}

impl TodoDraft {
    /// Take the draft for submission and reset both fields.
    ///
    /// An empty title yields nothing and leaves the draft as it was.
    pub fn take(&mut self) -> Option<NewTodo> {
        if self.title.is_empty() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(NewTodo {
            title: draft.title,
            description: draft.description,
        })
    }
}

/// Locally held copy of the server list plus the last failure, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    pub items: Vec<Todo>,
    pub error: Option<String>,
}

impl TodoList {
    /// Replace the items on success. On failure keep the stale items, record
    /// the message and hand the error back so the caller can react to a 401.
    pub fn apply(&mut self, result: ApiResult<Vec<Todo>>) -> Result<(), ApiError> {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(failure_message(&e));
                Err(e)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "Could not reach the to-do service.".to_string(),
        ApiError::Unauthorized { .. } => "Your session has expired. Please log in again.".to_string(),
        ApiError::Rejected { .. } => err.user_message("The to-do request failed."),
        ApiError::Decode(_) => "The to-do request failed.".to_string(),
    }
}

/// Apply a list/create/delete result; a 401 also ends the session.
pub fn settle<S: TokenStorage>(
    list: &mut TodoList,
    session: &mut Session<S>,
    result: ApiResult<Vec<Todo>>,
) -> Result<(), ApiError> {
    let outcome = list.apply(result);
    if let Err(e) = &outcome {
        if e.is_unauthorized() {
            // storage failures are logged by the session
            let _ = session.clear_token();
        }
    }
    outcome
}

pub async fn refresh(api: &ApiClient, token: &str) -> ApiResult<Vec<Todo>> {
    let result = api.list_todos(token).await;
    match &result {
        Ok(items) => debug!(count = items.len(), "todos loaded"),
        Err(e) => warn!(error = %e, "failed to fetch todos"),
    }
    result
}

/// Create, then re-fetch the whole list
pub async fn create_then_refresh(api: &ApiClient, token: &str, todo: &NewTodo) -> ApiResult<Vec<Todo>> {
    if let Err(e) = api.create_todo(token, todo).await {
        warn!(error = %e, "failed to create todo");
        return Err(e);
    }
    refresh(api, token).await
}

/// Delete, then re-fetch the whole list
pub async fn delete_then_refresh(api: &ApiClient, token: &str, id: i64) -> ApiResult<Vec<Todo>> {
    if let Err(e) = api.delete_todo(token, id).await {
        warn!(id, error = %e, "failed to delete todo");
        return Err(e);
    }
    refresh(api, token).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: String::new(),
            is_completed: false,
            owner_id: 1,
        }
    }

    #[test]
    fn empty_title_keeps_description() {
        let mut draft = TodoDraft {
            title: String::new(),
            description: "keep me".into(),
        };
        assert_eq!(draft.take(), None);
        assert_eq!(draft.description, "keep me");
    }

    #[test]
    fn take_clears_both_fields() {
        let mut draft = TodoDraft {
            title: "milk".into(),
            description: "2 litres".into(),
        };
        let new = draft.take().unwrap();
        assert_eq!(new.title, "milk");
        assert_eq!(new.description, "2 litres");
        assert_eq!(draft, TodoDraft::default());
    }

    #[test]
    fn failure_keeps_stale_items() {
        let mut list = TodoList::default();
        list.apply(Ok(vec![todo(1, "a")])).unwrap();

        let err = list.apply(Err(ApiError::Network("offline".into()))).unwrap_err();
        assert!(!err.is_unauthorized());
        assert_eq!(list.len(), 1);
        assert_eq!(list.error.as_deref(), Some("Could not reach the to-do service."));

        list.apply(Ok(vec![todo(1, "a"), todo(2, "b")])).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.error, None);
    }

    #[test]
    fn answered_failures_use_neutral_message() {
        let mut list = TodoList::default();
        let _ = list.apply(Err(ApiError::Rejected { status: 500, detail: None }));
        assert_eq!(list.error.as_deref(), Some("The to-do request failed."));

        let _ = list.apply(Err(ApiError::Rejected { status: 404, detail: Some("To-do item not found".into()) }));
        assert_eq!(list.error.as_deref(), Some("To-do item not found"));

        let _ = list.apply(Err(ApiError::Decode("expected array".into())));
        assert_eq!(list.error.as_deref(), Some("The to-do request failed."));
    }

    #[test]
    fn unauthorized_is_handed_back() {
        let mut list = TodoList::default();
        let err = list
            .apply(Err(ApiError::Unauthorized { detail: Some("Could not validate credentials".into()) }))
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(list.error.is_some());
    }
}
