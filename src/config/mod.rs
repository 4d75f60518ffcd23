//! Process configuration, sourced from the environment once at startup
//!
//! The auth gate never reads the environment itself; it receives the secret
//! through [`AppConfig`], injected at router construction.

use std::env;

/// Default bind address when `BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Process-wide configuration, read-only after startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared secret the auth gate compares against the `api-token` header.
    ///
    /// An empty secret means every request is rejected; the gate never
    /// accepts an empty header.
    pub api_token: String,

    /// Socket address the HTTP server binds to
    pub bind_addr: String,
}

impl AppConfig {
    /// Build a configuration with an explicit token and the default bind
    /// address. Used by tests and embedders.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `API_TOKEN` (empty when unset) and `BIND_ADDR` (defaulting to
    /// [`DEFAULT_BIND_ADDR`]).
    pub fn from_env() -> Self {
        Self {
            api_token: env::var("API_TOKEN").unwrap_or_default(),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_bind_addr() {
        let config = AppConfig::new("secret");
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_empty_token_is_representable() {
        // from_env falls back to an empty token when API_TOKEN is unset; the
        // gate then rejects everything rather than failing at startup.
        let config = AppConfig::new("");
        assert!(config.api_token.is_empty());
    }
}
