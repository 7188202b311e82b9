//! # inference-providers
//!
//! Route adapters and a provider registry for a multi-provider inference
//! client. Each provider tells the shared [`TaskProviderHelper`] which URL
//! path serves a task; the helper picks the host (the provider directly, or
//! the Hugging Face router for `hf_` tokens) and joins the two.
//!
//! ```rust,ignore
//! use inference_providers::prelude::*;
//!
//! let helper = get_provider_helper("novita", Task::Conversational)?;
//! assert_eq!(
//!     helper.prepare_url("novita-key", "meta-llama/llama-3.1-8b-instruct"),
//!     "https://api.novita.ai/v3/openai/chat/completions",
//! );
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod providers;
pub mod registry;
pub mod types;

#[cfg(test)]
mod test_support;

pub use crate::core::{RouteResolver, StandardRoute, TaskProviderHelper};
pub use config::RouterConfig;
pub use error::InferenceError;
pub use registry::{ProviderFactory, ProviderRegistry, get_provider_helper, global_registry};
pub use types::{RoutedRequest, Routing, Task};

/// Common imports
pub mod prelude {
    pub use crate::config::RouterConfig;
    pub use crate::core::{RouteResolver, StandardRoute, TaskProviderHelper};
    pub use crate::error::InferenceError;
    pub use crate::registry::{
        ProviderFactory, ProviderRegistry, get_provider_helper, global_registry,
    };
    pub use crate::types::{RoutedRequest, Routing, Task};
}
