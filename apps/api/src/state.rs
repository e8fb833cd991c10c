use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job listing source. Default: `JSearchClient`.
    pub jobs: Arc<dyn JobProvider>,
}
