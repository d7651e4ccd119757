use async_trait::async_trait;

use crate::degree::application::ports::outgoing::DegreeRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUnusedDegreeError {
    #[error("Degree not found")]
    NotFound,

    #[error("Degree is still referenced by {references} CV application(s)")]
    InUse { references: u64 },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DegreeRepositoryError> for DeleteUnusedDegreeError {
    fn from(err: DegreeRepositoryError) -> Self {
        match err {
            DegreeRepositoryError::NotFound => DeleteUnusedDegreeError::NotFound,
            DegreeRepositoryError::InUse { references } => {
                DeleteUnusedDegreeError::InUse { references }
            }
            DegreeRepositoryError::DatabaseError(msg) => {
                DeleteUnusedDegreeError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteUnusedDegreeUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteUnusedDegreeError>;
}
