use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::InferenceService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable inference backend. Default: GeminiClient.
    pub llm: Arc<dyn InferenceService>,
}
