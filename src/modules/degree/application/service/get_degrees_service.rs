use async_trait::async_trait;

use crate::degree::application::domain::entities::Degree;
use crate::degree::application::ports::incoming::use_cases::{
    GetDegreeError, GetDegreeUseCase, GetDegreesError, GetDegreesUseCase,
};
use crate::degree::application::ports::outgoing::DegreeRepository;

/// Serves both the degree list and single-degree lookups.
pub struct GetDegreesService<R>
where
    R: DegreeRepository,
{
    repository: R,
}

impl<R> GetDegreesService<R>
where
    R: DegreeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetDegreesUseCase for GetDegreesService<R>
where
    R: DegreeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Degree>, GetDegreesError> {
        self.repository
            .get_all()
            .await
            .map_err(|e| GetDegreesError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> GetDegreeUseCase for GetDegreesService<R>
where
    R: DegreeRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<Degree, GetDegreeError> {
        self.repository
            .get(id)
            .await
            .map_err(GetDegreeError::from)
    }
}
