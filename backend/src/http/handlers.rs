//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the decision logic.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info};
use uuid::Uuid;

use super::dto::{
    Decision, DecisionRequest, DisruptionRequest, HealthResponse, Recommendation,
    RecommendationEnvelope,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    }))
}

// =============================================================================
// Recommendations
// =============================================================================

/// POST /ai/recommend
///
/// Bare recommendation list, as served by the original advisor endpoint.
pub async fn recommend(
    payload: Result<Json<DisruptionRequest>, JsonRejection>,
) -> HandlerResult<Vec<Recommendation>> {
    let Json(request) = payload?;
    Ok(Json(run_recommendation(&request)))
}

/// POST /v1/recommendations
///
/// Same engine, wrapped in a `{success, recommendations}` envelope.
pub async fn recommend_v1(
    payload: Result<Json<DisruptionRequest>, JsonRejection>,
) -> HandlerResult<RecommendationEnvelope> {
    let Json(request) = payload?;
    Ok(Json(RecommendationEnvelope {
        success: true,
        recommendations: run_recommendation(&request),
    }))
}

fn run_recommendation(request: &DisruptionRequest) -> Vec<Recommendation> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        disruption_train_id = request.disruption_train_id,
        cause = request.cause_text(),
        trains = request.trains.len(),
        "recommendation requested"
    );

    let recommendations = services::recommend(request);

    debug!(%request_id, count = recommendations.len(), "recommendation complete");
    recommendations
}

// =============================================================================
// Quick decision
// =============================================================================

/// POST /v1/decision
///
/// One-line suggestion for a single train; 404 if the train is not in the snapshot.
pub async fn quick_decision(
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> HandlerResult<Decision> {
    let Json(request) = payload?;
    services::decide(&request)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Train not found".to_string()))
}
