use async_trait::async_trait;

use crate::degree::application::domain::entities::{Degree, DegreeData};
use crate::degree::application::ports::incoming::use_cases::{
    UpdateDegreeError, UpdateDegreeUseCase,
};
use crate::degree::application::ports::outgoing::DegreeRepository;

pub struct UpdateDegreeService<R>
where
    R: DegreeRepository,
{
    repository: R,
}

impl<R> UpdateDegreeService<R>
where
    R: DegreeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateDegreeUseCase for UpdateDegreeService<R>
where
    R: DegreeRepository + Send + Sync,
{
    async fn execute(&self, id: i32, data: DegreeData) -> Result<Degree, UpdateDegreeError> {
        self.repository
            .update(id, data)
            .await
            .map_err(UpdateDegreeError::from)
    }
}
