use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::{AnalysisInput, RiskAssessment, TriageEngine};

/// Router exposing the analysis pipeline; the hosting service layers
/// health, readiness, and metrics endpoints on top.
pub fn triage_router(engine: Arc<TriageEngine>) -> Router {
    Router::new()
        .route("/api/v1/triage/analyze", post(analyze_handler))
        .with_state(engine)
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<TriageEngine>>,
    Json(input): Json<AnalysisInput>,
) -> Json<RiskAssessment> {
    Json(engine.analyze(input).await)
}
