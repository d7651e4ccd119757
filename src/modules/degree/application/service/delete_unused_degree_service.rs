use async_trait::async_trait;

use crate::degree::application::ports::incoming::use_cases::{
    DeleteUnusedDegreeError, DeleteUnusedDegreeUseCase,
};
use crate::degree::application::ports::outgoing::DegreeRepository;

pub struct DeleteUnusedDegreeService<R>
where
    R: DegreeRepository,
{
    repository: R,
}

impl<R> DeleteUnusedDegreeService<R>
where
    R: DegreeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUnusedDegreeUseCase for DeleteUnusedDegreeService<R>
where
    R: DegreeRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteUnusedDegreeError> {
        self.repository
            .delete_unused(id)
            .await
            .map_err(DeleteUnusedDegreeError::from)
    }
}
