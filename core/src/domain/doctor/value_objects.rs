use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::doctor::entities::Doctor;
use crate::domain::doctor::policies::DEFAULT_PAGE_SIZE;

/// Listing sort keys. `Relevance` (descending recommendation count) is the
/// default and the fallback for unrecognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    ExperienceHigh,
    ExperienceLow,
    FeesHigh,
    FeesLow,
    Rating,
    #[default]
    Relevance,
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience_high" => Ok(SortBy::ExperienceHigh),
            "experience_low" => Ok(SortBy::ExperienceLow),
            "fees_high" => Ok(SortBy::FeesHigh),
            "fees_low" => Ok(SortBy::FeesLow),
            "rating" => Ok(SortBy::Rating),
            "relevance" => Ok(SortBy::Relevance),
            _ => Err(()),
        }
    }
}

/// Structured listing constraints. Every dimension is optional; an empty id
/// vector imposes no constraint on that dimension.
///
/// Within a dimension a doctor matches with at least one association in the
/// id set; across dimensions every specified constraint must hold.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorListFilter {
    pub mode_ids: Vec<i32>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    pub fees_min: Option<i32>,
    pub fees_max: Option<i32>,
    pub language_ids: Vec<i32>,
    pub facility_ids: Vec<i32>,
    pub sort_by: SortBy,
    pub page: u64,
    pub limit: u64,
}

impl Default for DoctorListFilter {
    fn default() -> Self {
        Self {
            mode_ids: Vec::new(),
            experience_min: None,
            experience_max: None,
            fees_min: None,
            fees_max: None,
            language_ids: Vec::new(),
            facility_ids: Vec::new(),
            sort_by: SortBy::default(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DoctorListFilter {
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

/// One page of listing results with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorPage {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub doctors: Vec<Doctor>,
}

impl DoctorPage {
    pub fn new(total: u64, page: u64, limit: u64, doctors: Vec<Doctor>) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            total,
            page,
            limit,
            total_pages,
            doctors,
        }
    }

    pub fn empty(page: u64, limit: u64) -> Self {
        Self::new(0, page, limit, Vec::new())
    }
}

/// Payload for the transactional create path. Scalar fields are validated
/// by the caller; the association lists may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDoctorInput {
    pub name: String,
    pub specialty: String,
    pub experience: i32,
    pub qualifications: String,
    pub location: String,
    pub fees: i32,
    pub rating: Option<f64>,
    pub recommendations: Option<i32>,
    pub profile_image: Option<String>,
    pub consultation_mode_ids: Vec<i32>,
    pub language_ids: Vec<i32>,
    pub facility_ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_parses_known_keys() {
        assert_eq!("fees_low".parse::<SortBy>(), Ok(SortBy::FeesLow));
        assert_eq!("fees_high".parse::<SortBy>(), Ok(SortBy::FeesHigh));
        assert_eq!("experience_high".parse::<SortBy>(), Ok(SortBy::ExperienceHigh));
        assert_eq!("experience_low".parse::<SortBy>(), Ok(SortBy::ExperienceLow));
        assert_eq!("rating".parse::<SortBy>(), Ok(SortBy::Rating));
    }

    #[test]
    fn test_sort_by_falls_back_to_relevance() {
        assert_eq!(
            "alphabetical".parse::<SortBy>().unwrap_or_default(),
            SortBy::Relevance
        );
        assert_eq!("".parse::<SortBy>().unwrap_or_default(), SortBy::Relevance);
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(DoctorPage::new(10, 1, 5, Vec::new()).total_pages, 2);
        assert_eq!(DoctorPage::new(11, 1, 5, Vec::new()).total_pages, 3);
        assert_eq!(DoctorPage::new(1, 1, 5, Vec::new()).total_pages, 1);
        assert_eq!(DoctorPage::new(0, 1, 5, Vec::new()).total_pages, 0);
    }

    #[test]
    fn test_offset_from_page_and_limit() {
        let filter = DoctorListFilter {
            page: 3,
            limit: 10,
            ..Default::default()
        };
        assert_eq!(filter.offset(), 20);
    }
}
