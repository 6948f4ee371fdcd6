use std::str::FromStr;

use mediseek_core::domain::doctor::value_objects::CreateDoctorInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Parses a comma-separated id list, best-effort: entries that are not
/// integers are skipped rather than failing the request. An all-invalid
/// list yields an empty vector, which imposes no constraint.
pub fn parse_id_list(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter_map(|entry| entry.trim().parse().ok())
        .collect()
}

/// Best-effort numeric parse; anything unparseable means "not provided".
pub fn parse_number<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|value| value.trim().parse().ok())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDoctorValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "specialty is required"))]
    pub specialty: String,

    #[validate(range(min = 0, message = "experience must be non-negative"))]
    pub experience: i32,

    #[validate(length(min = 1, message = "qualifications is required"))]
    pub qualifications: String,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[validate(range(min = 1, message = "fees must be positive"))]
    pub fees: i32,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be within 0 and 5"))]
    pub rating: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "recommendations must be non-negative"))]
    pub recommendations: Option<i32>,

    #[serde(default)]
    pub profile_image: Option<String>,

    #[serde(default)]
    pub consultation_modes: Vec<i32>,

    #[serde(default)]
    pub languages: Vec<i32>,

    #[serde(default)]
    pub facilities: Vec<i32>,
}

impl From<CreateDoctorValidator> for CreateDoctorInput {
    fn from(validator: CreateDoctorValidator) -> Self {
        Self {
            name: validator.name,
            specialty: validator.specialty,
            experience: validator.experience,
            qualifications: validator.qualifications,
            location: validator.location,
            fees: validator.fees,
            rating: validator.rating,
            recommendations: validator.recommendations,
            profile_image: validator.profile_image,
            consultation_mode_ids: validator.consultation_modes,
            language_ids: validator.languages,
            facility_ids: validator.facilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list_accepts_well_formed_input() {
        assert_eq!(parse_id_list("1,2,3"), vec![1, 2, 3]);
        assert_eq!(parse_id_list(" 4 , 5 "), vec![4, 5]);
    }

    #[test]
    fn test_parse_id_list_skips_non_numeric_entries() {
        assert_eq!(parse_id_list("1,x,3"), vec![1, 3]);
        assert_eq!(parse_id_list("abc"), Vec::<i32>::new());
        assert_eq!(parse_id_list(""), Vec::<i32>::new());
    }

    #[test]
    fn test_parse_number_best_effort() {
        assert_eq!(parse_number::<i64>(Some("42")), Some(42));
        assert_eq!(parse_number::<i64>(Some("forty-two")), None);
        assert_eq!(parse_number::<i64>(None), None);
    }

    fn valid_payload() -> CreateDoctorValidator {
        CreateDoctorValidator {
            name: "Dr. Amit Sharma".to_string(),
            specialty: "General Physician".to_string(),
            experience: 15,
            qualifications: "MBBS, MD".to_string(),
            location: "Delhi".to_string(),
            fees: 800,
            rating: Some(4.8),
            recommendations: Some(120),
            profile_image: None,
            consultation_modes: vec![1, 2],
            languages: vec![1, 2],
            facilities: vec![1],
        }
    }

    #[test]
    fn test_valid_payload_passes_validation() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut payload = valid_payload();
        payload.name = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        let mut payload = valid_payload();
        payload.rating = Some(5.5);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_zero_fees_is_rejected() {
        let mut payload = valid_payload();
        payload.fees = 0;
        assert!(payload.validate().is_err());
    }
}
