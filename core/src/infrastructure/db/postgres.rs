use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl PostgresConfig {
    pub fn new(database_url: String) -> Self {
        Self {
            database_url,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Explicitly constructed persistence handle. Built once at process start,
/// injected into repositories, drained via [`Postgres::close`] at shutdown.
#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("database migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub async fn close(&self) -> Result<(), DbErr> {
        self.db.clone().close().await
    }
}
