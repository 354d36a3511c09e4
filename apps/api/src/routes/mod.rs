pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::evaluation::handlers as evaluation;
use crate::portfolio::handlers as portfolio;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Evaluation API
        .route("/api/v1/evaluations", post(evaluation::handle_evaluate))
        .route(
            "/api/v1/evaluations/heuristic",
            post(evaluation::handle_evaluate_heuristic),
        )
        // Portfolio API
        .route("/api/v1/activities/enhance", post(portfolio::handle_enhance))
        .route("/api/v1/activities/arrange", post(portfolio::handle_arrange))
        // Catalog API
        .route(
            "/api/v1/universities",
            get(catalog::handle_search_universities),
        )
        .route(
            "/api/v1/universities/:id",
            get(catalog::handle_get_university),
        )
        .route(
            "/api/v1/extracurriculars",
            get(catalog::handle_search_opportunities),
        )
        .route(
            "/api/v1/extracurriculars/:id/activity",
            post(catalog::handle_opportunity_to_activity),
        )
        // Roadmap API
        .route("/api/v1/roadmap", get(roadmap::handle_get_roadmap))
        .route("/api/v1/roadmap/toggle", post(roadmap::handle_toggle_item))
        .with_state(state)
}
