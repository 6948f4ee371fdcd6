use axum::extract::State;
use mediseek_core::domain::doctor::entities::FilterOptions;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/filters",
    tag = "doctor",
    summary = "Get filter options",
    description = "Get the consultation modes, languages, and facilities available for filtering",
    responses(
        (status = 200, body = FilterOptions),
        (status = 500, description = "Failed to fetch filter options")
    )
)]
pub async fn get_filter_options(
    State(state): State<AppState>,
) -> Result<Response<FilterOptions>, ApiError> {
    let options = state
        .doctor_service
        .get_filter_options()
        .await
        .map_err(|e| {
            tracing::error!("Failed to load filter options: {}", e);
            ApiError::InternalServerError("Failed to fetch filter options".to_string())
        })?;

    Ok(Response::OK(options))
}
