pub mod degree_repository;

pub use degree_repository::{DegreeRepository, DegreeRepositoryError};
