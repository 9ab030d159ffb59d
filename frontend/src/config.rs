//! Client configuration
//!
//! The API base URL is fixed at build time through `HUZZAH_API_URL`, the same
//! way a bundler inlines environment variables into a static bundle.

use huzzah_shared::DEFAULT_API_URL;

/// Build-time override for the API base URL
const BUILD_API_URL: Option<&str> = option_env!("HUZZAH_API_URL");

/// Key under which the session token is persisted
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_key: &'static str,
}

impl ClientConfig {
    /// Configuration baked in at build time, falling back to the local dev server.
    pub fn from_build_env() -> Self {
        let url = BUILD_API_URL
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self::with_base_url(url)
    }

    pub fn with_base_url(url: &str) -> Self {
        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
            token_key: TOKEN_STORAGE_KEY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::with_base_url("https://api.example.com/api/");
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.token_key, "token");
    }
}
