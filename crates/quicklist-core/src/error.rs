//! Error types for backend calls and token storage

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur when talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (connection refused, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// 401 - missing, invalid or expired token / bad credentials
    #[error("Unauthorized{}", detail_suffix(.detail))]
    Unauthorized { detail: Option<String> },

    /// Any other non-2xx response
    #[error("Request rejected (status {status}){}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },

    /// 2xx response whose body did not match the expected shape
    #[error("Response parsing failed: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl ApiError {
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        if status == 401 {
            ApiError::Unauthorized { detail }
        } else {
            ApiError::Rejected { status, detail }
        }
    }

    /// Server-provided `detail`, if the failure carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text to show the user: the server detail for rejected requests,
    /// `fallback` when the server gave none, the error itself otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Rejected { detail, .. } => {
                detail.clone().unwrap_or_else(|| fallback.to_string())
            }
            other => other.to_string(),
        }
    }
}

/// Durable storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Storage write failed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_maps_to_unauthorized() {
        let err = ApiError::from_status(401, Some("Incorrect".into()));
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Incorrect"));
    }

    #[test]
    fn user_message_prefers_detail() {
        let err = ApiError::from_status(409, Some("Email already registered".into()));
        assert_eq!(err.user_message("Registration failed."), "Email already registered");

        let err = ApiError::from_status(500, None);
        assert_eq!(err.user_message("Registration failed."), "Registration failed.");
    }

    #[test]
    fn network_error_message_is_the_error_text() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("ignored"), "Network error: connection refused");
        assert_eq!(err.detail(), None);
    }
}
