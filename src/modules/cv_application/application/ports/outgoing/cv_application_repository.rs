use async_trait::async_trait;

use crate::cv_application::application::domain::{
    entities::{CvApplication, CvApplicationData},
    policies::field_rules::ValidationError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CvApplicationRepositoryError {
    #[error("CV application not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Degree {0} does not exist")]
    DegreeNotFound(i32),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence port for CV applications.
///
/// `add` and `update` validate the data and check that a referenced degree
/// exists before anything is written; a rejected write leaves the store
/// untouched.
#[async_trait]
pub trait CvApplicationRepository: Send + Sync {
    async fn add(
        &self,
        data: CvApplicationData,
    ) -> Result<CvApplication, CvApplicationRepositoryError>;

    /// All applications, ordered by id.
    async fn get_all(&self) -> Result<Vec<CvApplication>, CvApplicationRepositoryError>;

    async fn get(&self, id: i32) -> Result<CvApplication, CvApplicationRepositoryError>;

    async fn exists(&self, id: i32) -> Result<bool, CvApplicationRepositoryError>;

    async fn update(
        &self,
        id: i32,
        data: CvApplicationData,
    ) -> Result<CvApplication, CvApplicationRepositoryError>;

    /// Returns `NotFound` when no row has this id.
    async fn delete(&self, id: i32) -> Result<(), CvApplicationRepositoryError>;
}
