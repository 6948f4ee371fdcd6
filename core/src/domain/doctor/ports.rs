use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    doctor::{
        entities::FilterOptions,
        value_objects::{CreateDoctorInput, DoctorListFilter, DoctorPage},
    },
};

/// Repository port for the doctor directory.
#[cfg_attr(test, mockall::automock)]
pub trait DoctorRepository: Send + Sync {
    /// Returns one page of doctors matching the filter, together with the
    /// distinct total count. Read-only.
    fn list_with_filters(
        &self,
        filter: DoctorListFilter,
    ) -> impl Future<Output = Result<DoctorPage, CoreError>> + Send;

    /// Inserts a doctor row and its association rows in one transaction and
    /// returns the generated identifier. All-or-nothing: any failure rolls
    /// back every insert performed in this call.
    fn create_doctor(
        &self,
        input: CreateDoctorInput,
    ) -> impl Future<Output = Result<i64, CoreError>> + Send;

    /// Returns the full contents of the three lookup tables.
    fn get_filter_options(&self) -> impl Future<Output = Result<FilterOptions, CoreError>> + Send;
}
