//! Crate-wide constants

/// Default Hugging Face router base URL.
pub const DEFAULT_ROUTER_URL: &str = "https://router.huggingface.co";

/// Environment variable overriding the router base URL.
pub const ROUTER_URL_ENV: &str = "HF_INFERENCE_ROUTER_URL";

/// Prefix identifying Hugging Face user access tokens.
pub const HF_TOKEN_PREFIX: &str = "hf_";
