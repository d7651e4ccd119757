use async_trait::async_trait;

use crate::cv_application::application::domain::entities::CvApplication;
use crate::cv_application::application::ports::incoming::use_cases::{
    GetCvApplicationError, GetCvApplicationUseCase, GetCvApplicationsError,
    GetCvApplicationsUseCase,
};
use crate::cv_application::application::ports::outgoing::CvApplicationRepository;

pub struct GetCvApplicationsService<R>
where
    R: CvApplicationRepository,
{
    repository: R,
}

impl<R> GetCvApplicationsService<R>
where
    R: CvApplicationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCvApplicationsUseCase for GetCvApplicationsService<R>
where
    R: CvApplicationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CvApplication>, GetCvApplicationsError> {
        self.repository
            .get_all()
            .await
            .map_err(|e| GetCvApplicationsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> GetCvApplicationUseCase for GetCvApplicationsService<R>
where
    R: CvApplicationRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<CvApplication, GetCvApplicationError> {
        self.repository
            .get(id)
            .await
            .map_err(GetCvApplicationError::from)
    }
}
