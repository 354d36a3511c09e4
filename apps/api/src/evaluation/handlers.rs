//! Axum route handlers for the Evaluation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::evaluation::heuristic::evaluate_profile;
use crate::evaluation::{EvaluationSource, Verdict};
use crate::models::activity::Activity;
use crate::models::evaluation::EvaluationResult;
use crate::models::profile::ProfileInputs;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub profile: ProfileInputs,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub source: EvaluationSource,
    #[serde(flatten)]
    pub result: EvaluationResult,
}

impl From<Verdict> for EvaluationResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            evaluation_id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            source: verdict.source,
            result: verdict.result,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluations
///
/// Evaluates with the configured evaluator. Always succeeds; `source` reports
/// whether the narrative stage or the heuristic fallback produced the verdict.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Json<EvaluationResponse> {
    let verdict = state
        .evaluator
        .evaluate(&request.profile, &request.activities)
        .await;
    let response = EvaluationResponse::from(verdict);

    info!(
        "Evaluation {} complete: level={}, source={:?}",
        response.evaluation_id, response.result.level, response.source
    );
    Json(response)
}

/// POST /api/v1/evaluations/heuristic
///
/// Rule-based evaluation only; never calls out.
pub async fn handle_evaluate_heuristic(
    Json(request): Json<EvaluateRequest>,
) -> Json<EvaluationResponse> {
    let result = evaluate_profile(&request.profile, &request.activities);
    Json(EvaluationResponse::from(Verdict {
        result,
        source: EvaluationSource::Heuristic,
    }))
}
