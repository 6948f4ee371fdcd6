pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Doctor, LookupItem};
pub use ports::DoctorRepository;
pub use services::DoctorService;
