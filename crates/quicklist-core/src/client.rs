//! Backend API Client
//!
//! Bindings to the backend endpoints. One method per endpoint; no retries,
//! no caching. Works on wasm32 (fetch) and native (hyper).

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{AccessToken, Credentials, ErrorBody, NewTodo, Todo};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================
    // Auth
    // ========================

    /// `POST /token` (form-encoded) - returns the issued access token
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        debug!(email = %credentials.email, "login");
        let response = self
            .http
            .post(self.url("/token"))
            .form(&credentials.as_login_form())
            .send()
            .await
            .map_err(network)?;
        let token: AccessToken = decode(response).await?;
        Ok(token.access_token)
    }

    /// `POST /users/` (JSON) - registers and returns an access token
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<String> {
        debug!(email = %credentials.email, "register");
        let response = self
            .http
            .post(self.url("/users/"))
            .json(credentials)
            .send()
            .await
            .map_err(network)?;
        let token: AccessToken = decode(response).await?;
        Ok(token.access_token)
    }

    // ========================
    // Todos
    // ========================

    pub async fn list_todos(&self, token: &str) -> ApiResult<Vec<Todo>> {
        let response = self
            .http
            .get(self.url("/todos/"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    pub async fn create_todo(&self, token: &str, todo: &NewTodo) -> ApiResult<Todo> {
        let response = self
            .http
            .post(self.url("/todos/"))
            .bearer_auth(token)
            .json(todo)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    /// `DELETE /todos/{id}` - the backend answers 204, any 2xx counts
    pub async fn delete_todo(&self, token: &str, id: i64) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/todos/{}", id)))
            .bearer_auth(token)
            .send()
            .await
            .map_err(network)?;
        ensure_success(response).await.map(|_| ())
    }
}

fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Pass 2xx through; turn anything else into an `ApiError` carrying the
/// body's `detail` when there is one.
async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_detail);
    debug!(status = status.as_u16(), ?detail, "request rejected");
    Err(ApiError::from_status(status.as_u16(), detail))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
