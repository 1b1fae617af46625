use axum::Json;
use axum::extract::State;

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(
        state.app_env.clone(),
        state.started_at.elapsed().as_secs_f64(),
    ))
}
