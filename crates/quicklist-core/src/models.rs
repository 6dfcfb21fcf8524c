//! Wire Models
//!
//! Data structures matching the backend's request and response bodies.

use serde::{Deserialize, Deserializer, Serialize};

/// To-do item as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    /// Backend allows null here
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub is_completed: bool,
    pub owner_id: i64,
}

/// Body of `POST /todos/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

/// Login/registration input. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Form fields for `POST /token` (OAuth2 password flow names the email `username`)
    pub fn as_login_form(&self) -> [(&'static str, &str); 2] {
        [("username", self.email.as_str()), ("password", self.password.as_str())]
    }
}

/// Success body of `/token` and `/users/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Failure body. `detail` is a string for handled errors and a list of
/// objects for validation errors; only the string form is shown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
