//! Axum route handlers for the catalog API.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::catalog::opportunities::{find_opportunity, search_opportunities, Opportunity};
use crate::catalog::universities::{find_university, search_universities, University};
use crate::errors::AppError;
use crate::models::activity::{Activity, ActivityCategory};
use crate::models::region::TargetRegion;

#[derive(Debug, Deserialize)]
pub struct UniversitySearchQuery {
    pub query: Option<String>,
    pub region: Option<TargetRegion>,
}

#[derive(Debug, Deserialize)]
pub struct OpportunitySearchQuery {
    pub query: Option<String>,
    pub category: Option<ActivityCategory>,
}

/// GET /api/v1/universities
pub async fn handle_search_universities(
    Query(params): Query<UniversitySearchQuery>,
) -> Json<Vec<&'static University>> {
    Json(search_universities(params.query.as_deref(), params.region))
}

/// GET /api/v1/universities/:id
pub async fn handle_get_university(
    Path(id): Path<String>,
) -> Result<Json<&'static University>, AppError> {
    find_university(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("University {id} not found")))
}

/// GET /api/v1/extracurriculars
pub async fn handle_search_opportunities(
    Query(params): Query<OpportunitySearchQuery>,
) -> Json<Vec<&'static Opportunity>> {
    Json(search_opportunities(params.query.as_deref(), params.category))
}

/// POST /api/v1/extracurriculars/:id/activity
///
/// Returns a new portfolio activity seeded from the opportunity. The caller persists it.
pub async fn handle_opportunity_to_activity(
    Path(id): Path<String>,
) -> Result<Json<Activity>, AppError> {
    let opportunity = find_opportunity(&id)
        .ok_or_else(|| AppError::NotFound(format!("Opportunity {id} not found")))?;
    Ok(Json(opportunity.to_activity()))
}
