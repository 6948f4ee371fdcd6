pub mod db;
pub mod doctor;
pub mod health;
