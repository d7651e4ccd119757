use async_trait::async_trait;

use crate::cv_application::application::ports::outgoing::CvApplicationRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCvApplicationError {
    #[error("CV application not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvApplicationRepositoryError> for DeleteCvApplicationError {
    fn from(err: CvApplicationRepositoryError) -> Self {
        match err {
            CvApplicationRepositoryError::NotFound => DeleteCvApplicationError::NotFound,
            other => DeleteCvApplicationError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteCvApplicationUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteCvApplicationError>;
}
