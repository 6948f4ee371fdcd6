pub mod create_doctor;
pub mod get_doctors;
pub mod get_filter_options;
