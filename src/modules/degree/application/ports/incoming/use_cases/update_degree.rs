use async_trait::async_trait;

use crate::degree::application::{
    domain::entities::{Degree, DegreeData},
    ports::outgoing::DegreeRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateDegreeError {
    #[error("Degree not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DegreeRepositoryError> for UpdateDegreeError {
    fn from(err: DegreeRepositoryError) -> Self {
        match err {
            DegreeRepositoryError::NotFound => UpdateDegreeError::NotFound,
            other => UpdateDegreeError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateDegreeUseCase: Send + Sync {
    async fn execute(&self, id: i32, data: DegreeData) -> Result<Degree, UpdateDegreeError>;
}
