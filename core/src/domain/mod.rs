pub mod common;
pub mod doctor;
pub mod health;
