use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use enrollment_docs::error::AppError;
use enrollment_docs::workflows::enrollment::enrollment_router;
use enrollment_docs::workflows::roster::{evaluate_roster, RosterImporter, RosterSummary};
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct RosterRequest {
    pub(crate) roster_csv: String,
}

pub(crate) fn with_enrollment_routes() -> axum::Router {
    enrollment_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/enrollment/roster",
            axum::routing::post(roster_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn roster_endpoint(
    Json(payload): Json<RosterRequest>,
) -> Result<Json<RosterSummary>, AppError> {
    let reader = Cursor::new(payload.roster_csv.into_bytes());
    let enrollments = RosterImporter::from_reader(reader)?;
    Ok(Json(evaluate_roster(&enrollments)))
}
