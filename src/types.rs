//! Shared types for provider task helpers

use crate::error::InferenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inference task kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Task {
    /// Single-turn prompt completion
    TextGeneration,
    /// Multi-turn chat completion
    Conversational,
}

impl Task {
    /// All task kinds, in wire-name order.
    pub const ALL: [Task; 2] = [Task::Conversational, Task::TextGeneration];

    /// Wire name of the task (e.g. `"text-generation"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Task::TextGeneration => "text-generation",
            Task::Conversational => "conversational",
        }
    }

    /// OpenAI-style route used when a provider does not override it.
    pub const fn default_route(&self) -> &'static str {
        match self {
            Task::TextGeneration => "/v1/completions",
            Task::Conversational => "/v1/chat/completions",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| InferenceError::InvalidInput(format!("Unknown task '{s}'")))
    }
}

/// How a request reaches the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Routing {
    /// Straight to the provider's own base URL
    Direct,
    /// Through the Hugging Face router proxy
    Router,
}

/// A request whose target URL has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutedRequest {
    pub provider: String,
    pub task: Task,
    /// Model id in the provider's own naming
    pub model: String,
    pub url: String,
    pub routing: Routing,
}
