use axum::{Json, Router, extract::State, routing::get};
use mediseek_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository};
use serde_json::{Value, json};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health"), get(liveness))
        .route(&format!("{root_path}/health/ready"), get(readiness))
}

async fn liveness() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.health_repository.readiness().await.map_err(|e| {
        tracing::error!("Readiness check failed: {}", e);
        ApiError::InternalServerError("Database unreachable".to_string())
    })?;

    Ok(Response::OK(status))
}
