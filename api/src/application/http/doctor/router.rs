use super::handlers::{
    create_doctor::{__path_create_doctor, create_doctor},
    get_doctors::{__path_get_doctors, get_doctors},
    get_filter_options::{__path_get_filter_options, get_filter_options},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_doctors, create_doctor, get_filter_options))]
pub struct DoctorApiDoc;

pub fn doctor_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(
            &format!("{root_path}/doctors"),
            get(get_doctors).post(create_doctor),
        )
        .route(&format!("{root_path}/filters"), get(get_filter_options))
}
