use std::env;

use crate::models::common::{DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL};

/// Seconds before the recorded expiry at which a cached token is already
/// treated as expired. Conservative default; see `DESIGN.md`.
pub const DEFAULT_REFRESH_MARGIN_SECS: i64 = 30;

/// Default transport timeout for both the session exchange and the
/// generation call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ImageFxConfig {
    pub api_base_url: String,
    pub auth_base_url: String,
    pub timeout_secs: u64,
    pub token_refresh_margin_secs: i64,
}

impl Default for ImageFxConfig {
    fn default() -> Self {
        ImageFxConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token_refresh_margin_secs: DEFAULT_REFRESH_MARGIN_SECS,
        }
    }
}

impl ImageFxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("IMGFX_API_URL") {
            config.api_base_url = url;
        }
        if let Ok(url) = env::var("IMGFX_AUTH_URL") {
            config.auth_base_url = url;
        }
        if let Some(secs) = env::var("IMGFX_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok()) {
            config.timeout_secs = secs;
        }
        if let Some(secs) = env::var("IMGFX_REFRESH_MARGIN_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.token_refresh_margin_secs = secs;
        }
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_token_refresh_margin_secs(mut self, secs: i64) -> Self {
        self.token_refresh_margin_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ImageFxConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.auth_base_url, DEFAULT_AUTH_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.token_refresh_margin_secs, DEFAULT_REFRESH_MARGIN_SECS);
    }

    #[test]
    fn test_builder_chain() {
        let config = ImageFxConfig::new()
            .with_api_base_url("http://127.0.0.1:9000")
            .with_auth_base_url("http://127.0.0.1:9001")
            .with_timeout_secs(5)
            .with_token_refresh_margin_secs(0);
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.auth_base_url, "http://127.0.0.1:9001");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.token_refresh_margin_secs, 0);
    }
}
