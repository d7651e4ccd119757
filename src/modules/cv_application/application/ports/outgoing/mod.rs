pub mod cv_application_repository;
pub mod cv_file_storage;

pub use cv_application_repository::{CvApplicationRepository, CvApplicationRepositoryError};
pub use cv_file_storage::{CvFileStorage, CvFileStorageError};

#[cfg(test)]
pub use cv_file_storage::MockCvFileStorage;
