pub mod cv_application_use_cases;
pub mod domain;
pub mod ports;
pub mod service;

pub use cv_application_use_cases::CvApplicationUseCases;
