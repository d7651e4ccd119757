use async_trait::async_trait;

use crate::degree::application::domain::entities::{Degree, DegreeData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateDegreeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateDegreeUseCase: Send + Sync {
    async fn execute(&self, data: DegreeData) -> Result<Degree, CreateDegreeError>;
}
