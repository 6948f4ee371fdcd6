use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::DatabaseHealthStatus,
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}
