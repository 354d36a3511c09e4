//! Axum route handlers for the Roadmap API.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::region::TargetRegion;
use crate::roadmap::{ensure_defaults, toggle_item, GradeLevel, RoadmapStage};

#[derive(Debug, Deserialize)]
pub struct RoadmapQuery {
    #[serde(default)]
    pub grade_level: GradeLevel,
    #[serde(default)]
    pub region: TargetRegion,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub grade_level: GradeLevel,
    #[serde(default)]
    pub region: TargetRegion,
    #[serde(default)]
    pub stages: Vec<RoadmapStage>,
    pub stage_id: String,
    pub item_id: String,
}

#[derive(Debug, Serialize)]
pub struct StageView {
    #[serde(flatten)]
    pub stage: RoadmapStage,
    pub progress_percent: u8,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub stages: Vec<StageView>,
}

impl From<Vec<RoadmapStage>> for RoadmapResponse {
    fn from(stages: Vec<RoadmapStage>) -> Self {
        Self {
            stages: stages
                .into_iter()
                .map(|stage| StageView {
                    progress_percent: stage.progress_percent(),
                    stage,
                })
                .collect(),
        }
    }
}

/// GET /api/v1/roadmap
///
/// Default stages for a grade level and target region.
pub async fn handle_get_roadmap(Query(params): Query<RoadmapQuery>) -> Json<RoadmapResponse> {
    Json(ensure_defaults(vec![], params.grade_level, params.region).into())
}

/// POST /api/v1/roadmap/toggle
///
/// Flips one checklist item in the caller's stages (defaults if none were sent)
/// and returns the updated roadmap for the caller to persist.
pub async fn handle_toggle_item(
    Json(req): Json<ToggleRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if req.stage_id.trim().is_empty() || req.item_id.trim().is_empty() {
        return Err(AppError::Validation(
            "stage_id and item_id cannot be empty".to_string(),
        ));
    }

    let stages = ensure_defaults(req.stages, req.grade_level, req.region);
    let stages = toggle_item(stages, &req.stage_id, &req.item_id)?;
    Ok(Json(stages.into()))
}
