pub mod repositories;

pub use repositories::health_repository::PostgresHealthCheckRepository;
