pub mod degree_use_cases;
pub mod domain;
pub mod ports;
pub mod service;

pub use degree_use_cases::DegreeUseCases;
