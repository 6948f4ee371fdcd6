use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(DatabaseHealthStatus { reachable: true })
    }
}
