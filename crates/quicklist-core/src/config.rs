//! Client Configuration

/// Backend used when no override was baked in at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Storage key holding the raw token string
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash
    pub api_url: String,
    /// Durable storage key for the session token
    pub token_key: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    /// Build-time config. A wasm bundle has no process environment, so the
    /// override is read by `option_env!` when the crate is compiled.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("QUICKLIST_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::new("http://api.test/");
        assert_eq!(config.api_url, "http://api.test");
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ClientConfig::default().api_url, "http://localhost:8000");
    }
}
