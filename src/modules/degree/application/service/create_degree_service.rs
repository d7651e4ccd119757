use async_trait::async_trait;

use crate::degree::application::domain::entities::{Degree, DegreeData};
use crate::degree::application::ports::incoming::use_cases::{
    CreateDegreeError, CreateDegreeUseCase,
};
use crate::degree::application::ports::outgoing::DegreeRepository;

pub struct CreateDegreeService<R>
where
    R: DegreeRepository,
{
    repository: R,
}

impl<R> CreateDegreeService<R>
where
    R: DegreeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateDegreeUseCase for CreateDegreeService<R>
where
    R: DegreeRepository + Send + Sync,
{
    async fn execute(&self, data: DegreeData) -> Result<Degree, CreateDegreeError> {
        self.repository
            .add(data)
            .await
            .map_err(|e| CreateDegreeError::RepositoryError(e.to_string()))
    }
}
