//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::dto::{PlanTripRequest, PlanTripResponse};
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/trip", post(plan_trip).fallback(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Any method other than POST on the trip endpoint.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Plan trips between two places.
async fn plan_trip(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so malformed bodies get our own 400
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "invalid trip request body");
        AppError::BadRequest {
            message: "invalid request body".to_string(),
        }
    })?;

    let request = req.validate()?;

    info!(
        origin = request.origin(),
        destination = request.destination(),
        result_count = request.result_count(),
        "trip request received"
    );

    let trips = state.planner.plan(&request).await?;

    let json = serde_json::to_vec(&PlanTripResponse { trips }).map_err(|e| AppError::Internal {
        message: format!("failed to write response: {e}"),
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}
