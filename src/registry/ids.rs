//! Provider id constants.
//!
//! Centralizing ids avoids "stringly-typed" lookups scattered across modules.

pub const NOVITA: &str = "novita";
