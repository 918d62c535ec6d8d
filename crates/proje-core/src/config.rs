//! Client Configuration
//!
//! Where the backend lives and where the session is persisted.

/// Backend API root used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Storage key holding the serialized session
pub const DEFAULT_SESSION_KEY: &str = "currentUser";

/// Settings shared by the HTTP client and the session store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to (no trailing slash)
    pub base_url: String,
    /// Durable storage key for the logged-in user
    pub session_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Override the API root. Trailing slashes are dropped so that
    /// endpoint paths (which start with `/`) join cleanly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.session_key, "currentUser");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::default().with_base_url("https://proje.example.com/api//");
        assert_eq!(config.base_url, "https://proje.example.com/api");
    }
}
