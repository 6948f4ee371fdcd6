pub mod doctor_repository;
