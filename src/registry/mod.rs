//! Provider registry
//!
//! An explicit map from provider name to [`ProviderFactory`]. The global
//! instance is built once, on first access, and is read-only afterwards;
//! callers that need a different provider set build their own
//! [`ProviderRegistry`].

pub mod ids;

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::RouterConfig;
use crate::core::TaskProviderHelper;
use crate::error::InferenceError;
use crate::types::Task;

/// Builds task helpers for one provider
pub trait ProviderFactory: Send + Sync + std::fmt::Debug {
    /// Registry key (e.g. `"novita"`)
    fn provider_id(&self) -> &'static str;

    /// Tasks this provider serves.
    fn supported_tasks(&self) -> &'static [Task];

    /// Helper for `task`, or `None` when the provider does not serve it.
    fn task_helper(&self, task: Task) -> Option<TaskProviderHelper>;
}

/// Provider name to factory mapping
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, Arc<dyn ProviderFactory>>,
    router: RouterConfig,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every provider enabled by cargo features.
    pub fn with_builtin_providers() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_providers();
        registry
    }

    fn register_builtin_providers(&mut self) {
        #[cfg(feature = "novita")]
        self.register(Arc::new(crate::providers::novita::NovitaProviderFactory));
    }

    /// Router applied to every helper this registry hands out.
    pub fn with_router(mut self, router: RouterConfig) -> Self {
        self.router = router;
        self
    }

    /// Register a factory, replacing any previous one with the same id.
    pub fn register(&mut self, factory: Arc<dyn ProviderFactory>) {
        let id = factory.provider_id().to_string();
        if self.factories.insert(id.clone(), factory).is_some() {
            tracing::debug!(provider = %id, "replaced provider factory");
        }
    }

    pub fn has_provider(&self, provider_id: &str) -> bool {
        self.factories.contains_key(provider_id)
    }

    /// Registered provider ids, sorted.
    pub fn list_providers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Tasks served by `provider_id`, if registered.
    pub fn supported_tasks(&self, provider_id: &str) -> Option<&'static [Task]> {
        self.factories
            .get(provider_id)
            .map(|factory| factory.supported_tasks())
    }

    /// Look up the helper serving `task` for `provider_id`.
    pub fn resolve(
        &self,
        provider_id: &str,
        task: Task,
    ) -> Result<TaskProviderHelper, InferenceError> {
        let factory = self.factories.get(provider_id).ok_or_else(|| {
            InferenceError::UnknownProvider {
                provider: provider_id.to_string(),
                available: self
                    .list_providers()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            }
        })?;

        let helper = factory
            .task_helper(task)
            .ok_or_else(|| InferenceError::UnsupportedTask {
                provider: provider_id.to_string(),
                task: task.to_string(),
                available: factory
                    .supported_tasks()
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
            })?;

        tracing::debug!(provider = %provider_id, %task, "resolved provider helper");
        Ok(helper.with_router(self.router.clone()))
    }
}

/// Router from the environment; an invalid override is logged and the
/// default router is kept.
fn router_from_env() -> RouterConfig {
    RouterConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Ignoring router override: {e}");
        RouterConfig::default()
    })
}

lazy_static::lazy_static! {
    static ref GLOBAL_REGISTRY: ProviderRegistry =
        ProviderRegistry::with_builtin_providers().with_router(router_from_env());
}

/// Process-wide registry of built-in providers.
pub fn global_registry() -> &'static ProviderRegistry {
    &GLOBAL_REGISTRY
}

/// Convenience function to resolve a helper from the global registry
pub fn get_provider_helper(
    provider_id: &str,
    task: Task,
) -> Result<TaskProviderHelper, InferenceError> {
    global_registry().resolve(provider_id, task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROUTER_URL_ENV;
    use crate::test_support::{ENV_LOCK, EnvGuard};
    use tracing_test::traced_test;

    #[derive(Debug)]
    struct ChatOnlyFactory;

    impl ProviderFactory for ChatOnlyFactory {
        fn provider_id(&self) -> &'static str {
            "chat-only"
        }

        fn supported_tasks(&self) -> &'static [Task] {
            &[Task::Conversational]
        }

        fn task_helper(&self, task: Task) -> Option<TaskProviderHelper> {
            (task == Task::Conversational).then(|| {
                TaskProviderHelper::with_standard_route("chat-only", "https://api.chat.test", task)
            })
        }
    }

    #[test]
    fn empty_registry_reports_no_providers() {
        let registry = ProviderRegistry::new();
        assert!(registry.list_providers().is_empty());
        assert!(!registry.has_provider("novita"));
    }

    #[test]
    fn register_and_resolve_custom_factory() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(ChatOnlyFactory));

        assert!(registry.has_provider("chat-only"));
        let helper = registry.resolve("chat-only", Task::Conversational).unwrap();
        assert_eq!(
            helper.prepare_url("key", "m"),
            "https://api.chat.test/v1/chat/completions"
        );
    }

    #[test]
    fn unsupported_task_lists_available_tasks() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(ChatOnlyFactory));

        let err = registry
            .resolve("chat-only", Task::TextGeneration)
            .unwrap_err();
        assert_eq!(
            err,
            InferenceError::UnsupportedTask {
                provider: "chat-only".to_string(),
                task: "text-generation".to_string(),
                available: vec!["conversational".to_string()],
            }
        );
    }

    #[test]
    fn unknown_provider_lists_registered_ids() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(ChatOnlyFactory));

        let err = registry.resolve("acme", Task::Conversational).unwrap_err();
        match err {
            InferenceError::UnknownProvider { provider, available } => {
                assert_eq!(provider, "acme");
                assert_eq!(available, vec!["chat-only".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn registry_router_is_applied_to_helpers() {
        let mut registry =
            ProviderRegistry::new().with_router(RouterConfig::new("http://proxy.local"));
        registry.register(Arc::new(ChatOnlyFactory));

        let helper = registry.resolve("chat-only", Task::Conversational).unwrap();
        assert_eq!(
            helper.prepare_url("hf_token", "m"),
            "http://proxy.local/chat-only/v1/chat/completions"
        );
    }

    #[cfg(feature = "novita")]
    #[test]
    fn builtin_registry_contains_novita_tasks() {
        let registry = ProviderRegistry::with_builtin_providers();
        assert!(registry.list_providers().contains(&ids::NOVITA));
        assert_eq!(
            registry.supported_tasks(ids::NOVITA),
            Some(&[Task::Conversational, Task::TextGeneration][..])
        );

        let helper = registry.resolve(ids::NOVITA, Task::TextGeneration).unwrap();
        assert_eq!(helper.resolve_route("any"), "/v3/openai/completions");
    }

    #[test]
    fn router_from_env_applies_valid_override() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::set(ROUTER_URL_ENV, "https://proxy.example.com");

        assert_eq!(router_from_env(), RouterConfig::new("https://proxy.example.com"));
    }

    #[test]
    #[traced_test]
    fn router_from_env_warns_and_keeps_default_on_invalid_override() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::set(ROUTER_URL_ENV, "https:///novita");

        assert_eq!(router_from_env(), RouterConfig::default());
        assert!(logs_contain("Ignoring router override: Configuration error:"));
        assert!(logs_contain("has no valid host"));
    }

    #[test]
    #[traced_test]
    fn router_from_env_is_silent_when_unset() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::remove(ROUTER_URL_ENV);

        assert_eq!(router_from_env(), RouterConfig::default());
        assert!(!logs_contain("Ignoring router override"));
    }
}
