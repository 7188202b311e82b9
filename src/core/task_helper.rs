//! Task provider helper
//!
//! [`TaskProviderHelper`] binds a provider's identity and base URL to a task
//! and a [`RouteResolver`]. It owns the logic every provider shares: choosing
//! between a direct call and the Hugging Face router, and joining the chosen
//! host with the provider-specific route.

use super::route::{RouteResolver, StandardRoute};
use crate::config::RouterConfig;
use crate::constants::HF_TOKEN_PREFIX;
use crate::types::{RoutedRequest, Routing, Task};
use std::borrow::Cow;
use std::sync::Arc;

/// Shared request-target logic for one (provider, task) pair
#[derive(Debug, Clone)]
pub struct TaskProviderHelper {
    provider: Cow<'static, str>,
    base_url: Cow<'static, str>,
    task: Task,
    route: Arc<dyn RouteResolver>,
    router: RouterConfig,
}

impl TaskProviderHelper {
    pub fn new(
        provider: impl Into<Cow<'static, str>>,
        base_url: impl Into<Cow<'static, str>>,
        task: Task,
        route: Arc<dyn RouteResolver>,
    ) -> Self {
        Self {
            provider: provider.into(),
            base_url: base_url.into(),
            task,
            route,
            router: RouterConfig::default(),
        }
    }

    /// Helper using the task's conventional OpenAI-style route.
    pub fn with_standard_route(
        provider: impl Into<Cow<'static, str>>,
        base_url: impl Into<Cow<'static, str>>,
        task: Task,
    ) -> Self {
        Self::new(provider, base_url, task, Arc::new(StandardRoute::new(task)))
    }

    /// Replace the router used for Hugging Face tokens.
    pub fn with_router(mut self, router: RouterConfig) -> Self {
        self.router = router;
        self
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn task(&self) -> Task {
        self.task
    }

    pub fn router(&self) -> &RouterConfig {
        &self.router
    }

    pub fn resolve_route(&self, mapped_model: &str) -> Cow<'static, str> {
        self.route.resolve_route(mapped_model)
    }

    /// Hugging Face tokens go through the router; any other key is sent to
    /// the provider as-is.
    pub fn routing_for(&self, api_key: &str) -> Routing {
        if api_key.starts_with(HF_TOKEN_PREFIX) {
            Routing::Router
        } else {
            Routing::Direct
        }
    }

    /// Full endpoint URL for `mapped_model` when authenticating with `api_key`.
    pub fn prepare_url(&self, api_key: &str, mapped_model: &str) -> String {
        self.prepare_url_with_routing(api_key, mapped_model).0
    }

    pub fn prepare_request(&self, api_key: &str, mapped_model: &str) -> RoutedRequest {
        let (url, routing) = self.prepare_url_with_routing(api_key, mapped_model);
        RoutedRequest {
            provider: self.provider.to_string(),
            task: self.task,
            model: mapped_model.to_string(),
            url,
            routing,
        }
    }

    fn prepare_url_with_routing(&self, api_key: &str, mapped_model: &str) -> (String, Routing) {
        let routing = self.routing_for(api_key);
        let base: Cow<'_, str> = match routing {
            Routing::Router => {
                tracing::info!(
                    "Calling '{}' provider through Hugging Face router.",
                    self.provider
                );
                Cow::Owned(self.router.proxy_base_url(&self.provider))
            }
            Routing::Direct => {
                tracing::info!("Calling '{}' provider directly.", self.provider);
                Cow::Borrowed(self.base_url.as_ref())
            }
        };

        let route = self.resolve_route(mapped_model);
        let url = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            route.trim_start_matches('/')
        );
        tracing::debug!(provider = %self.provider, task = %self.task, %url, "resolved endpoint");
        (url, routing)
    }
}
