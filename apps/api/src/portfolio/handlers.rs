//! Axum route handlers for the Portfolio API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::activity::{arrange, Activity, ActivityView};
use crate::portfolio::enhance::enhance_description;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub activity: Activity,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub activity_id: String,
    pub enhanced_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ArrangeRequest {
    pub activities: Vec<Activity>,
    pub view: ActivityView,
}

/// POST /api/v1/activities/enhance
///
/// Returns an enhanced description; the caller stores it as `ai_enhanced_description`.
pub async fn handle_enhance(Json(req): Json<EnhanceRequest>) -> Json<EnhanceResponse> {
    info!("Enhancing description for activity {}", req.activity.id);
    Json(EnhanceResponse {
        enhanced_description: enhance_description(&req.activity),
        activity_id: req.activity.id,
    })
}

/// POST /api/v1/activities/arrange
pub async fn handle_arrange(Json(req): Json<ArrangeRequest>) -> Json<Vec<Activity>> {
    Json(arrange(req.activities, req.view))
}
