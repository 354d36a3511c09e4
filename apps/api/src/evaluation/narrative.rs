//! Narrative evaluation — one best-effort LLM call, heuristic fallback on any failure.
//!
//! Flow: match target universities → build prompt → single LLM call → parse verdict.
//! The attempt runs on its own task so that errors and panics alike end in the
//! heuristic verdict; the caller never sees a failure from this path.

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{error, info, warn};

use crate::catalog::universities::{match_target_universities, University, UNIVERSITIES};
use crate::evaluation::heuristic::evaluate_profile;
use crate::evaluation::parsing::parse_generated_verdict;
use crate::evaluation::prompts::{build_evaluation_prompt, EVALUATION_SYSTEM};
use crate::evaluation::{EvaluationSource, Evaluator, Verdict};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::activity::Activity;
use crate::models::evaluation::EvaluationResult;
use crate::models::profile::ProfileInputs;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("no text-generation credential configured")]
    MissingCredential,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("generated text did not contain a usable verdict")]
    Unparseable,

    #[error("narrative task aborted: {0}")]
    Aborted(String),
}

/// LLM-backed evaluator. Without a client every call is answered heuristically.
#[derive(Clone)]
pub struct NarrativeEvaluator {
    llm: Option<LlmClient>,
    references: &'static [University],
}

impl NarrativeEvaluator {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self {
            llm,
            references: UNIVERSITIES,
        }
    }

    /// Runs the narrative stage once. Errors are returned, never logged here.
    pub async fn try_narrative(
        &self,
        profile: &ProfileInputs,
        activities: &[Activity],
    ) -> Result<EvaluationResult, NarrativeError> {
        let llm = self.llm.clone().ok_or(NarrativeError::MissingCredential)?;
        let references = self.references;
        let profile = profile.clone();
        let activities = activities.to_vec();

        let attempt = tokio::spawn(async move {
            let relevant = match_target_universities(&profile.target_universities, references);
            info!(
                "Narrative evaluation: {} activities, {} reference universities",
                activities.len(),
                relevant.len()
            );
            let prompt = build_evaluation_prompt(&profile, &activities, &relevant);
            let text = llm.call_text(&prompt, EVALUATION_SYSTEM).await?;
            parse_generated_verdict(&text, &profile).ok_or(NarrativeError::Unparseable)
        });

        contained(attempt).await
    }
}

/// Aborts the wrapped task when dropped.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Awaits a spawned attempt. A panic becomes `Aborted`; dropping the returned
/// future cancels the task so no call outlives its request.
async fn contained<T: Send + 'static>(
    attempt: JoinHandle<Result<T, NarrativeError>>,
) -> Result<T, NarrativeError> {
    let _guard = AbortOnDrop(attempt.abort_handle());
    attempt
        .await
        .map_err(|e| NarrativeError::Aborted(e.to_string()))?
}

#[async_trait]
impl Evaluator for NarrativeEvaluator {
    async fn evaluate(&self, profile: &ProfileInputs, activities: &[Activity]) -> Verdict {
        match self.try_narrative(profile, activities).await {
            Ok(result) => Verdict {
                result,
                source: EvaluationSource::Narrative,
            },
            Err(err) => {
                match &err {
                    NarrativeError::MissingCredential => {
                        warn!("Narrative evaluation unavailable ({err}), using heuristic evaluation")
                    }
                    _ => error!("Narrative evaluation failed: {err}; using heuristic evaluation"),
                }
                Verdict {
                    result: evaluate_profile(profile, activities),
                    source: EvaluationSource::Heuristic,
                }
            }
        }
    }
}
