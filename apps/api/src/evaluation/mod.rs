// Competitiveness evaluation: heuristic rules plus optional LLM narrative.
// All LLM calls go through llm_client; the heuristic evaluator is the terminal fallback.

pub mod handlers;
pub mod heuristic;
pub mod narrative;
pub mod parsing;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::activity::Activity;
use crate::models::evaluation::EvaluationResult;
use crate::models::profile::ProfileInputs;

/// Which stage produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationSource {
    Heuristic,
    Narrative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub result: EvaluationResult,
    pub source: EvaluationSource,
}

/// The evaluator trait. Implementations never fail: every call yields a usable verdict.
///
/// Carried in `AppState` as `Arc<dyn Evaluator>`.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, profile: &ProfileInputs, activities: &[Activity]) -> Verdict;
}
