use async_trait::async_trait;

use crate::degree::application::{
    domain::entities::Degree, ports::outgoing::DegreeRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDegreesError {
    #[error("Failed to fetch degrees: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDegreeError {
    #[error("Degree not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DegreeRepositoryError> for GetDegreeError {
    fn from(err: DegreeRepositoryError) -> Self {
        match err {
            DegreeRepositoryError::NotFound => GetDegreeError::NotFound,
            other => GetDegreeError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetDegreesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Degree>, GetDegreesError>;
}

#[async_trait]
pub trait GetDegreeUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Degree, GetDegreeError>;
}
