use async_trait::async_trait;

use crate::cv_application::application::{
    domain::entities::CvApplication, ports::outgoing::CvApplicationRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvApplicationsError {
    #[error("Failed to fetch CV applications: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvApplicationError {
    #[error("CV application not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvApplicationRepositoryError> for GetCvApplicationError {
    fn from(err: CvApplicationRepositoryError) -> Self {
        match err {
            CvApplicationRepositoryError::NotFound => GetCvApplicationError::NotFound,
            other => GetCvApplicationError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetCvApplicationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CvApplication>, GetCvApplicationsError>;
}

#[async_trait]
pub trait GetCvApplicationUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<CvApplication, GetCvApplicationError>;
}
