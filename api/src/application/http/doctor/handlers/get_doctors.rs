use axum::extract::{Query, State};
use mediseek_core::domain::doctor::{
    entities::Doctor,
    policies::{effective_limit, effective_page},
    value_objects::{DoctorListFilter, DoctorPage},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::{
    doctor::validators::{parse_id_list, parse_number},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

/// Raw query parameters, kept as strings so malformed values degrade to
/// "no constraint" instead of a rejected request (best-effort parsing).
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GetDoctorsParams {
    /// Comma-separated consultation mode ids.
    pub mode_ids: Option<String>,
    pub experience_min: Option<String>,
    pub experience_max: Option<String>,
    pub fees_min: Option<String>,
    pub fees_max: Option<String>,
    /// Comma-separated language ids.
    pub language_ids: Option<String>,
    /// Comma-separated facility ids.
    pub facility_ids: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl GetDoctorsParams {
    pub fn into_filter(self) -> DoctorListFilter {
        DoctorListFilter {
            mode_ids: self.mode_ids.as_deref().map(parse_id_list).unwrap_or_default(),
            experience_min: parse_number(self.experience_min.as_deref()),
            experience_max: parse_number(self.experience_max.as_deref()),
            fees_min: parse_number(self.fees_min.as_deref()),
            fees_max: parse_number(self.fees_max.as_deref()),
            language_ids: self
                .language_ids
                .as_deref()
                .map(parse_id_list)
                .unwrap_or_default(),
            facility_ids: self
                .facility_ids
                .as_deref()
                .map(parse_id_list)
                .unwrap_or_default(),
            sort_by: self
                .sort_by
                .as_deref()
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            page: effective_page(parse_number(self.page.as_deref())),
            limit: effective_limit(parse_number(self.limit.as_deref())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaginationResponse {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDoctorsResponse {
    pub doctors: Vec<Doctor>,
    pub pagination: PaginationResponse,
}

impl From<DoctorPage> for GetDoctorsResponse {
    fn from(page: DoctorPage) -> Self {
        Self {
            pagination: PaginationResponse {
                total: page.total,
                page: page.page,
                limit: page.limit,
                total_pages: page.total_pages,
            },
            doctors: page.doctors,
        }
    }
}

#[utoipa::path(
    get,
    path = "/doctors",
    tag = "doctor",
    summary = "List doctors",
    description = "List doctors with filtering, sorting, and pagination",
    params(GetDoctorsParams),
    responses(
        (status = 200, body = GetDoctorsResponse),
        (status = 500, description = "Failed to fetch doctors")
    )
)]
pub async fn get_doctors(
    State(state): State<AppState>,
    Query(params): Query<GetDoctorsParams>,
) -> Result<Response<GetDoctorsResponse>, ApiError> {
    let filter = params.into_filter();

    let page = state
        .doctor_service
        .list_doctors(filter)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list doctors: {}", e);
            ApiError::InternalServerError("Failed to fetch doctors".to_string())
        })?;

    Ok(Response::OK(GetDoctorsResponse::from(page)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediseek_core::domain::doctor::{
        policies::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
        value_objects::SortBy,
    };

    fn params_from(query: &str) -> GetDoctorsParams {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn test_filter_from_full_query_string() {
        let filter = params_from(
            "modeIds=1,2&experienceMin=10&experienceMax=15&feesMin=500&feesMax=900\
             &languageIds=2&facilityIds=1&sortBy=fees_low&page=2&limit=10",
        )
        .into_filter();

        assert_eq!(filter.mode_ids, vec![1, 2]);
        assert_eq!(filter.experience_min, Some(10));
        assert_eq!(filter.experience_max, Some(15));
        assert_eq!(filter.fees_min, Some(500));
        assert_eq!(filter.fees_max, Some(900));
        assert_eq!(filter.language_ids, vec![2]);
        assert_eq!(filter.facility_ids, vec![1]);
        assert_eq!(filter.sort_by, SortBy::FeesLow);
        assert_eq!(filter.page, 2);
        assert_eq!(filter.limit, 10);
    }

    #[test]
    fn test_absent_parameters_impose_no_constraint() {
        let filter = params_from("").into_filter();

        assert!(filter.mode_ids.is_empty());
        assert!(filter.language_ids.is_empty());
        assert!(filter.facility_ids.is_empty());
        assert_eq!(filter.experience_min, None);
        assert_eq!(filter.fees_max, None);
        assert_eq!(filter.sort_by, SortBy::Relevance);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_limit_is_capped_at_parse_time() {
        let filter = params_from("limit=1000").into_filter();
        assert_eq!(filter.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_malformed_values_degrade_gracefully() {
        let filter =
            params_from("modeIds=1,x,3&experienceMin=ten&sortBy=alphabetical&page=-2").into_filter();

        assert_eq!(filter.mode_ids, vec![1, 3]);
        assert_eq!(filter.experience_min, None);
        assert_eq!(filter.sort_by, SortBy::Relevance);
        assert_eq!(filter.page, 1);
    }
}
