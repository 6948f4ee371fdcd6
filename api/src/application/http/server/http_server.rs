use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use mediseek_core::{
    domain::{common::DatabaseConfig, doctor::services::DoctorService},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        doctor::PostgresDoctorRepository,
        health::PostgresHealthCheckRepository,
    },
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::{info_span, warn};

use crate::application::http::doctor::router::doctor_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let database_config = DatabaseConfig::from(&args.database);
    let postgres = Postgres::new(PostgresConfig::new(database_config.connection_url())).await?;

    let doctor_repository = PostgresDoctorRepository::new(postgres.get_db());
    let health_repository = PostgresHealthCheckRepository::new(postgres.get_db());

    Ok(AppState::new(
        args,
        postgres,
        DoctorService::new(doctor_repository),
        health_repository,
    ))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();
    let openapi = ApiDoc::openapi();
    let request_timeout = Duration::from_secs(state.args.server.request_timeout_secs);

    let router = axum::Router::new()
        .route(
            &format!("{root_path}/api-docs/openapi.json"),
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(doctor_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}
