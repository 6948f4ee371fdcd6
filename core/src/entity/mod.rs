pub mod consultation_modes;
pub mod doctor_consultation_modes;
pub mod doctor_facilities;
pub mod doctor_languages;
pub mod doctors;
pub mod facilities;
pub mod languages;
