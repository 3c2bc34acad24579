pub mod person_service;
pub mod registration_service;
pub mod traits;
pub mod types;
