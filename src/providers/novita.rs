//! Novita provider
//!
//! Novita serves OpenAI-compatible completions under `/v3/openai` instead of
//! the usual `/v1` prefix, so both tasks override the standard route.

use crate::core::{RouteResolver, TaskProviderHelper};
use crate::registry::{ProviderFactory, ids};
use crate::types::Task;
use std::borrow::Cow;
use std::sync::Arc;

pub const PROVIDER: &str = ids::NOVITA;
pub const BASE_URL: &str = "https://api.novita.ai";

/// Text generation (`/v3/openai/completions`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NovitaTextGenerationTask;

impl NovitaTextGenerationTask {
    pub fn helper() -> TaskProviderHelper {
        TaskProviderHelper::new(PROVIDER, BASE_URL, Task::TextGeneration, Arc::new(Self))
    }
}

impl RouteResolver for NovitaTextGenerationTask {
    fn resolve_route(&self, _mapped_model: &str) -> Cow<'static, str> {
        // no v1/ route for novita
        Cow::Borrowed("/v3/openai/completions")
    }
}

/// Chat completion (`/v3/openai/chat/completions`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NovitaConversationalTask;

impl NovitaConversationalTask {
    pub fn helper() -> TaskProviderHelper {
        TaskProviderHelper::new(PROVIDER, BASE_URL, Task::Conversational, Arc::new(Self))
    }
}

impl RouteResolver for NovitaConversationalTask {
    fn resolve_route(&self, _mapped_model: &str) -> Cow<'static, str> {
        Cow::Borrowed("/v3/openai/chat/completions")
    }
}

static_assertions::assert_impl_all!(NovitaTextGenerationTask: Send, Sync);
static_assertions::assert_impl_all!(NovitaConversationalTask: Send, Sync);

/// Registry factory for the novita tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NovitaProviderFactory;

impl ProviderFactory for NovitaProviderFactory {
    fn provider_id(&self) -> &'static str {
        PROVIDER
    }

    fn supported_tasks(&self) -> &'static [Task] {
        &[Task::Conversational, Task::TextGeneration]
    }

    fn task_helper(&self, task: Task) -> Option<TaskProviderHelper> {
        match task {
            Task::TextGeneration => Some(NovitaTextGenerationTask::helper()),
            Task::Conversational => Some(NovitaConversationalTask::helper()),
        }
    }
}
