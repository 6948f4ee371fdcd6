use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of a reference dimension (consultation mode, language or
/// facility) attached to a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LookupItem {
    pub id: i32,
    pub name: String,
}

/// A directory entry with its three association sets resolved.
///
/// The association vectors are always present; a doctor without languages
/// carries an empty vector, never a null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub experience: i32,
    pub qualifications: String,
    pub location: String,
    pub fees: i32,
    pub rating: Option<f64>,
    pub recommendations: Option<i32>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub consultation_modes: Vec<LookupItem>,
    #[serde(default)]
    pub languages: Vec<LookupItem>,
    #[serde(default)]
    pub facilities: Vec<LookupItem>,
}

/// The three lookup tables, as consumed by the filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterOptions {
    pub consultation_modes: Vec<LookupItem>,
    pub languages: Vec<LookupItem>,
    pub facilities: Vec<LookupItem>,
}
