use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    doctor::{
        entities::FilterOptions,
        policies::MAX_PAGE_SIZE,
        ports::DoctorRepository,
        value_objects::{CreateDoctorInput, DoctorListFilter, DoctorPage},
    },
};

/// Policy layer between the transport and the repository port.
///
/// Pagination bounds are re-enforced here so no caller can bypass the page
/// size cap, whatever the adapter in front of it parsed.
#[derive(Debug, Clone)]
pub struct DoctorService<R>
where
    R: DoctorRepository,
{
    repository: R,
}

impl<R> DoctorService<R>
where
    R: DoctorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn list_doctors(&self, mut filter: DoctorListFilter) -> Result<DoctorPage, CoreError> {
        filter.page = filter.page.max(1);
        filter.limit = filter.limit.clamp(1, MAX_PAGE_SIZE);

        debug!(?filter, "listing doctors");
        self.repository.list_with_filters(filter).await
    }

    pub async fn create_doctor(&self, input: CreateDoctorInput) -> Result<i64, CoreError> {
        debug!(name = %input.name, "creating doctor");
        self.repository.create_doctor(input).await
    }

    pub async fn get_filter_options(&self) -> Result<FilterOptions, CoreError> {
        self.repository.get_filter_options().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::doctor::ports::MockDoctorRepository;

    fn empty_page(filter: &DoctorListFilter) -> DoctorPage {
        DoctorPage::empty(filter.page, filter.limit)
    }

    #[tokio::test]
    async fn test_list_caps_limit_before_hitting_repository() {
        let mut repository = MockDoctorRepository::new();
        repository
            .expect_list_with_filters()
            .withf(|filter| filter.limit == MAX_PAGE_SIZE)
            .returning(|filter| {
                let page = empty_page(&filter);
                Box::pin(std::future::ready(Ok(page)))
            });

        let service = DoctorService::new(repository);
        let filter = DoctorListFilter {
            limit: 1000,
            ..Default::default()
        };

        let page = service.list_doctors(filter).await.unwrap();
        assert_eq!(page.limit, MAX_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_list_repairs_zero_page_and_limit() {
        let mut repository = MockDoctorRepository::new();
        repository
            .expect_list_with_filters()
            .withf(|filter| filter.page == 1 && filter.limit == 1)
            .returning(|filter| {
                let page = empty_page(&filter);
                Box::pin(std::future::ready(Ok(page)))
            });

        let service = DoctorService::new(repository);
        let filter = DoctorListFilter {
            page: 0,
            limit: 0,
            ..Default::default()
        };

        let page = service.list_doctors(filter).await.unwrap();
        assert_eq!(page.page, 1);
    }

    #[tokio::test]
    async fn test_list_keeps_filter_dimensions_intact() {
        let mut repository = MockDoctorRepository::new();
        repository
            .expect_list_with_filters()
            .withf(|filter| {
                filter.language_ids == vec![2]
                    && filter.experience_min == Some(10)
                    && filter.experience_max == Some(15)
            })
            .returning(|filter| {
                let page = empty_page(&filter);
                Box::pin(std::future::ready(Ok(page)))
            });

        let service = DoctorService::new(repository);
        let filter = DoctorListFilter {
            language_ids: vec![2],
            experience_min: Some(10),
            experience_max: Some(15),
            ..Default::default()
        };

        assert!(service.list_doctors(filter).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_propagates_write_failures() {
        let mut repository = MockDoctorRepository::new();
        repository.expect_create_doctor().returning(|_| {
            Box::pin(std::future::ready(Err(CoreError::InsertRejected(
                "missing facility".to_string(),
            ))))
        });

        let service = DoctorService::new(repository);
        let input = CreateDoctorInput {
            name: "Dr. Test".to_string(),
            specialty: "General Physician".to_string(),
            experience: 5,
            qualifications: "MBBS".to_string(),
            location: "Delhi".to_string(),
            fees: 500,
            rating: None,
            recommendations: None,
            profile_image: None,
            consultation_mode_ids: vec![1],
            language_ids: vec![1],
            facility_ids: vec![999],
        };

        let err = service.create_doctor(input).await.unwrap_err();
        assert!(matches!(err, CoreError::InsertRejected(_)));
    }
}
