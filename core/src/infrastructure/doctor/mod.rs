pub mod mappers;
pub mod repositories;

pub use repositories::doctor_repository::PostgresDoctorRepository;
