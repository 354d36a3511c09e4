use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::Evaluator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable evaluator. Default: NarrativeEvaluator. Swap via ENABLE_NARRATIVE_EVALUATION.
    pub evaluator: Arc<dyn Evaluator>,
}
