//! # Client configuration
//!
//! Where the backend lives and how long to wait for it.
//!
//! ```toml
//! [api]
//! base = "http://localhost:8000"   # scheme + host, no trailing slash needed
//! timeout_ms = 5000                # ignored in the browser
//! ```
//!
//! A missing file or section is equivalent to the defaults. The base URL can
//! also be fixed at build time with the `ILLUMINATI_API_BASE` environment
//! variable, which is how the wasm bundle is pointed at a deployed backend.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend location and request timeout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base")]
    pub base: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: default_api_base(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base: base.into(),
                ..ApiConfig::default()
            },
        }
    }

    /// Defaults, with the base URL taken from `ILLUMINATI_API_BASE` when it was
    /// set at build time.
    pub fn from_build_env() -> Self {
        match option_env!("ILLUMINATI_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.api.timeout_ms = timeout_ms;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The base URL without trailing slashes, checked to be http(s).
    pub fn base_url(&self) -> Result<&str, ApiError> {
        let base = self.api.base.trim().trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            Ok(base)
        } else {
            Err(ApiError::Config(format!(
                "API base must be an http(s) URL, got {:?}",
                self.api.base
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base, "http://localhost:8000");
        assert_eq!(config.api.timeout_ms, 5000);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml("[api]\nbase = \"https://api.example.org/\"\n").unwrap();
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.base_url().unwrap(), "https://api.example.org");
    }

    #[test]
    fn test_toml_roundtrip_preserves_timeout() {
        let config = ClientConfig::new("http://backend:8000").with_timeout_ms(1500);
        let text = config.to_toml().unwrap();
        assert!(text.contains("timeout_ms = 1500"));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_base_url_rejects_non_http() {
        let config = ClientConfig::new("backend:8000");
        assert!(matches!(config.base_url(), Err(ApiError::Config(_))));
    }
}
