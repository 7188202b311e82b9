//! Provider-agnostic routing core

mod route;
mod task_helper;

pub use route::{RouteResolver, StandardRoute};
pub use task_helper::TaskProviderHelper;
