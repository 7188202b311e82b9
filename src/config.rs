//! Router configuration
//!
//! Requests authenticated with a Hugging Face token are sent through the
//! router proxy instead of the provider's own host. [`RouterConfig`] holds
//! where that proxy lives and can be loaded from the environment or JSON.

use crate::constants::{DEFAULT_ROUTER_URL, ROUTER_URL_ENV};
use crate::error::InferenceError;
use serde::{Deserialize, Serialize};
use std::env::VarError;

/// Location of the Hugging Face router proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Router base URL; the provider name is appended as a path segment
    pub router_url: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            router_url: DEFAULT_ROUTER_URL.to_string(),
        }
    }
}

impl RouterConfig {
    pub fn new(router_url: impl Into<String>) -> Self {
        Self {
            router_url: router_url.into(),
        }
    }

    /// Read `HF_INFERENCE_ROUTER_URL`, falling back to the default router
    /// when it is unset or blank.
    pub fn from_env() -> Result<Self, InferenceError> {
        match std::env::var(ROUTER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                let config = Self::new(url.trim());
                config.validate()?;
                Ok(config)
            }
            Ok(_) | Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(InferenceError::ConfigurationError(format!(
                "{ROUTER_URL_ENV} is not valid UTF-8: {raw:?}"
            ))),
        }
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, InferenceError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.router_url = config.router_url.trim().to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InferenceError> {
        let rest = self
            .router_url
            .strip_prefix("https://")
            .or_else(|| self.router_url.strip_prefix("http://"))
            .ok_or_else(|| {
                InferenceError::ConfigurationError(format!(
                    "Router URL must start with http:// or https://, got '{}'",
                    self.router_url
                ))
            })?;

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(InferenceError::ConfigurationError(format!(
                "Router URL '{}' has no valid host",
                self.router_url
            )));
        }
        Ok(())
    }

    /// Base URL of the router proxy for `provider`.
    pub fn proxy_base_url(&self, provider: &str) -> String {
        format!("{}/{}", self.router_url.trim_end_matches('/'), provider)
    }
}
