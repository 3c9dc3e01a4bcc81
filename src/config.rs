//! Client configuration: YAML file, environment overrides and API key lookup.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `UNSPEECH_API_KEY` | `api_key` |
//! | `UNSPEECH_BASE_URL` | `base_url` |
//! | `UNSPEECH_HTTP_TIMEOUT_SECS` | `timeout_secs` |
//! | `UNSPEECH_PROXY_URL` | `proxy_url` |

use crate::utils::DEFAULT_BASE_URL;
use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const ENV_API_KEY: &str = "UNSPEECH_API_KEY";
pub const ENV_BASE_URL: &str = "UNSPEECH_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "UNSPEECH_HTTP_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "UNSPEECH_PROXY_URL";

const KEYRING_SERVICE: &str = "unspeech";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy_url: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `UNSPEECH_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file, then apply environment overrides.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded client config");
        let config = Self::from_yaml_str(&content)?.with_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    ///
    /// Unparseable or zero timeouts are ignored with a warning.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(key) = non_empty(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(raw) = non_empty(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }
        if let Some(proxy) = non_empty(ENV_PROXY_URL) {
            self.proxy_url = Some(proxy);
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone())
                    .with_source("config"),
            )
        })?;
        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "timeout_secs must be greater than zero",
                ErrorContext::new()
                    .with_field_path("timeout_secs")
                    .with_source("config"),
            ));
        }
        Ok(())
    }

    /// Resolve the API key for `backend`.
    ///
    /// Order: explicit config value, OS keyring (`unspeech` / backend id),
    /// `<BACKEND>_API_KEY`, then `UNSPEECH_API_KEY`.
    pub fn resolve_api_key(&self, backend: &str) -> Result<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Ok(key.clone());
        }

        if let Ok(entry) = Entry::new(KEYRING_SERVICE, backend) {
            if let Ok(key) = entry.get_password() {
                return Ok(key);
            }
        }

        let backend_var = format!("{}_API_KEY", backend.replace('-', "_").to_uppercase());
        env::var(&backend_var)
            .or_else(|_| env::var(ENV_API_KEY))
            .map_err(|_| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_details(format!("set {} or {}", backend_var, ENV_API_KEY))
                        .with_source("config"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::default().with_overrides(lookup(&[
            (ENV_API_KEY, "secret"),
            (ENV_BASE_URL, "https://gw.example.com/v1/"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_PROXY_URL, "  "),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "https://gw.example.com/v1/");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.proxy_url, None);
    }

    #[test]
    fn test_invalid_timeout_override_is_ignored() {
        let config = ClientConfig::default().with_overrides(lookup(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_override_is_ignored() {
        let config = ClientConfig::default().with_overrides(lookup(&[(ENV_TIMEOUT_SECS, "0")]));
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = ClientConfig::from_yaml_str("base_url: https://gw.example.com/v1\n").unwrap();
        assert_eq!(config.base_url, "https://gw.example.com/v1");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_yaml_validation() {
        assert!(matches!(
            ClientConfig::from_yaml_str("base_url: not-a-url\n"),
            Err(Error::Configuration { .. })
        ));
        assert!(matches!(
            ClientConfig::from_yaml_str("timeout_secs: 0\n"),
            Err(Error::Configuration { .. })
        ));
        assert!(matches!(
            ClientConfig::from_yaml_str("timeout_secs: [1, 2]\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = ClientConfig::default().with_api_key("explicit");
        assert_eq!(config.resolve_api_key("deepgram").unwrap(), "explicit");
    }
}
