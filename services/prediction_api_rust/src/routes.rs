//! HTTP routes and handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use matchcast_rust_core::{
    predict, MatchRequest, OutcomeModel, PredictionError, PredictionResult, TeamStatsStore,
};
use serde_json::json;
use tracing::error;

/// Shared read-only state. Both collaborators are loaded before the first
/// request and never mutated while serving.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TeamStatsStore>,
    pub model: Arc<dyn OutcomeModel>,
}

/// Assemble the router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/teams", get(list_teams))
        .route("/predict", post(predict_match))
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "online",
        "model": state.model.model_name(),
        "teams": state.store.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn list_teams(State(state): State<AppState>) -> Json<serde_json::Value> {
    let teams = state.store.team_names();
    Json(json!({
        "count": teams.len(),
        "teams": teams,
    }))
}

async fn predict_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    let result = predict(&request, &state.store, state.model.as_ref()).await?;
    Ok(Json(result))
}

/// Maps core errors onto HTTP responses.
pub struct ApiError(PredictionError);

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PredictionError::TeamNotFound { teams } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "one or both teams not found in statistics store",
                    "missing_teams": teams,
                })),
            )
                .into_response(),
            PredictionError::Model(err) => {
                error!("outcome model failure: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "prediction service unavailable" })),
                )
                    .into_response()
            }
        }
    }
}
