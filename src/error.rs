//! Error types for provider resolution and routing.

use thiserror::Error;

/// Errors raised while configuring or resolving inference providers.
///
/// Route adapters never fail; every variant here comes from the registry or
/// the configuration layer around them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Caller-supplied value could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    JsonError(String),

    /// No factory is registered under the requested provider name
    #[error("Provider '{provider}' not supported. Available values: {}", available.join(", "))]
    UnknownProvider {
        provider: String,
        available: Vec<String>,
    },

    /// The provider is known but does not offer the requested task
    #[error(
        "Task '{task}' not supported for provider '{provider}'. Available tasks: {}",
        available.join(", ")
    )]
    UnsupportedTask {
        provider: String,
        task: String,
        available: Vec<String>,
    },
}

impl From<serde_json::Error> for InferenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
