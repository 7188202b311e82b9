//! Built-in providers
//!
//! Each provider is enabled by its cargo feature.

#[cfg(feature = "novita")]
pub mod novita;
