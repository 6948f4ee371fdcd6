use std::sync::Arc;

use mediseek_core::{
    domain::doctor::services::DoctorService,
    infrastructure::{
        db::postgres::Postgres, doctor::PostgresDoctorRepository,
        health::PostgresHealthCheckRepository,
    },
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub postgres: Arc<Postgres>,
    pub doctor_service: Arc<DoctorService<PostgresDoctorRepository>>,
    pub health_repository: Arc<PostgresHealthCheckRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        postgres: Postgres,
        doctor_service: DoctorService<PostgresDoctorRepository>,
        health_repository: PostgresHealthCheckRepository,
    ) -> Self {
        Self {
            args,
            postgres: Arc::new(postgres),
            doctor_service: Arc::new(doctor_service),
            health_repository: Arc::new(health_repository),
        }
    }
}
