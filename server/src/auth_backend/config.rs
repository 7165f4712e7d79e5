//! Auth backend configuration parsed from environment variables.

use crate::llm::config::parse_u64;

pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Keys this short are placeholders, not real project keys.
const PLACEHOLDER_KEY_MAX_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthBackendConfig {
    pub url: String,
    pub key: String,
    /// Where confirmation links land, when the backend sends links.
    pub redirect_url: Option<String>,
    pub timeouts: AuthTimeouts,
}

/// Resolved auth mode. There are no fallback credentials: anything short of
/// a valid URL and key means demo mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    Configured(AuthBackendConfig),
    Demo,
}

impl AuthMode {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

impl AuthBackendConfig {
    /// Resolve the auth mode from environment variables.
    ///
    /// - `AUTH_BACKEND_URL`: `http://` or `https://` base URL
    /// - `AUTH_BACKEND_KEY`: public API key (longer than 20 characters)
    /// - `AUTH_REDIRECT_URL`: optional confirmation redirect
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 15
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    #[must_use]
    pub fn resolve() -> AuthMode {
        let mode = Self::from_lookup(|key| std::env::var(key).ok());
        if mode.is_configured() {
            tracing::info!("auth backend configured");
        } else {
            tracing::warn!("auth backend not configured, running auth in demo mode");
        }
        mode
    }

    /// Same as [`AuthBackendConfig::resolve`] with an injectable variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AuthMode {
        let url = lookup("AUTH_BACKEND_URL").map(|v| v.trim().trim_end_matches('/').to_owned());
        let key = lookup("AUTH_BACKEND_KEY").map(|v| v.trim().to_owned());
        let (Some(url), Some(key)) = (url, key) else {
            return AuthMode::Demo;
        };
        if !is_valid(&url, &key) {
            return AuthMode::Demo;
        }

        let redirect_url = lookup("AUTH_REDIRECT_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        let timeouts = AuthTimeouts {
            request_secs: parse_u64(lookup("AUTH_REQUEST_TIMEOUT_SECS"), DEFAULT_AUTH_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("AUTH_CONNECT_TIMEOUT_SECS"), DEFAULT_AUTH_CONNECT_TIMEOUT_SECS),
        };

        AuthMode::Configured(Self { url, key, redirect_url, timeouts })
    }
}

#[must_use]
pub fn is_valid(url: &str, key: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://")) && key.len() > PLACEHOLDER_KEY_MAX_LEN
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
