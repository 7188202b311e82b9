//! Route resolution strategy
//!
//! A provider plugs into [`TaskProviderHelper`](super::TaskProviderHelper) by
//! supplying a [`RouteResolver`]: the one piece that decides which URL path a
//! task is served under. Everything else (host selection, URL joining,
//! logging) stays in the helper.

use crate::types::Task;
use std::borrow::Cow;

/// Maps a mapped model id to the URL path suffix of a provider endpoint.
///
/// Implementations must be pure: the helper calls them from any thread
/// without synchronization.
pub trait RouteResolver: Send + Sync + std::fmt::Debug {
    /// Path to append to the base URL, starting with `/`.
    fn resolve_route(&self, mapped_model: &str) -> Cow<'static, str>;
}

/// Conventional OpenAI-style routes (`/v1/completions`, `/v1/chat/completions`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardRoute {
    task: Task,
}

impl StandardRoute {
    pub const fn new(task: Task) -> Self {
        Self { task }
    }
}

impl RouteResolver for StandardRoute {
    fn resolve_route(&self, _mapped_model: &str) -> Cow<'static, str> {
        Cow::Borrowed(self.task.default_route())
    }
}
