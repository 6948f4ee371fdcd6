use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    doctor::validators::CreateDoctorValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateDoctorResponse {
    pub id: i64,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/doctors",
    tag = "doctor",
    summary = "Create doctor",
    description = "Create a doctor with its consultation mode, language, and facility associations in one transaction",
    request_body = CreateDoctorValidator,
    responses(
        (status = 201, body = CreateDoctorResponse, description = "Doctor created successfully"),
        (status = 400, description = "Invalid payload"),
        (status = 500, description = "Failed to add doctor")
    )
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(payload): Json<CreateDoctorValidator>,
) -> Result<Response<CreateDoctorResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let id = state
        .doctor_service
        .create_doctor(payload.into())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create doctor: {}", e);
            ApiError::InternalServerError("Failed to add doctor".to_string())
        })?;

    Ok(Response::Created(CreateDoctorResponse {
        id,
        message: "Doctor added successfully".to_string(),
    }))
}
