use async_trait::async_trait;
use tracing::{info, warn};

use crate::cv_application::application::ports::incoming::use_cases::{
    DeleteCvApplicationError, DeleteCvApplicationUseCase,
};
use crate::cv_application::application::ports::outgoing::{CvApplicationRepository, CvFileStorage};

pub struct DeleteCvApplicationService<R, S>
where
    R: CvApplicationRepository,
    S: CvFileStorage,
{
    repository: R,
    storage: S,
}

impl<R, S> DeleteCvApplicationService<R, S>
where
    R: CvApplicationRepository,
    S: CvFileStorage,
{
    pub fn new(repository: R, storage: S) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R, S> DeleteCvApplicationUseCase for DeleteCvApplicationService<R, S>
where
    R: CvApplicationRepository + Send + Sync,
    S: CvFileStorage + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteCvApplicationError> {
        let existing = self.repository.get(id).await?;

        self.repository.delete(id).await?;

        // The row is gone; a leftover file is only logged.
        if let Some(blob) = existing.cv_blob {
            match self.storage.remove(&blob).await {
                Ok(()) => info!(blob = %blob, application_id = id, "Removed CV document"),
                Err(e) => warn!(blob = %blob, "Failed to remove CV document: {}", e),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::cv_application::application::domain::entities::{
        CvApplication, CvApplicationData,
    };
    use crate::cv_application::application::ports::outgoing::{
        CvApplicationRepositoryError, CvFileStorageError, MockCvFileStorage,
    };

    struct MockCvApplicationRepository {
        existing: Option<CvApplication>,
    }

    #[async_trait]
    impl CvApplicationRepository for MockCvApplicationRepository {
        async fn add(
            &self,
            _data: CvApplicationData,
        ) -> Result<CvApplication, CvApplicationRepositoryError> {
            unimplemented!("not used")
        }

        async fn get_all(&self) -> Result<Vec<CvApplication>, CvApplicationRepositoryError> {
            unimplemented!("not used")
        }

        async fn get(&self, _id: i32) -> Result<CvApplication, CvApplicationRepositoryError> {
            self.existing
                .clone()
                .ok_or(CvApplicationRepositoryError::NotFound)
        }

        async fn exists(&self, _id: i32) -> Result<bool, CvApplicationRepositoryError> {
            unimplemented!("not used")
        }

        async fn update(
            &self,
            _id: i32,
            _data: CvApplicationData,
        ) -> Result<CvApplication, CvApplicationRepositoryError> {
            unimplemented!("not used")
        }

        async fn delete(&self, _id: i32) -> Result<(), CvApplicationRepositoryError> {
            Ok(())
        }
    }

    fn row(cv_blob: Option<&str>) -> CvApplication {
        CvApplication {
            id: 3,
            first_name: "TestName 3".into(),
            last_name: "TestLN 3".into(),
            email: "test3@test.com".into(),
            mobile: None,
            degree_id: None,
            cv_blob: cv_blob.map(str::to_string),
            date_created: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn deletes_row_and_document() {
        let mut storage = MockCvFileStorage::new();
        storage
            .expect_remove()
            .with(eq("abc.pdf"))
            .times(1)
            .returning(|_| Ok(()));

        let service = DeleteCvApplicationService::new(
            MockCvApplicationRepository {
                existing: Some(row(Some("abc.pdf"))),
            },
            storage,
        );

        assert!(service.execute(3).await.is_ok());
    }

    #[actix_web::test]
    async fn row_without_document_skips_storage() {
        let mut storage = MockCvFileStorage::new();
        storage.expect_remove().never();

        let service = DeleteCvApplicationService::new(
            MockCvApplicationRepository {
                existing: Some(row(None)),
            },
            storage,
        );

        assert!(service.execute(3).await.is_ok());
    }

    #[actix_web::test]
    async fn storage_failure_does_not_fail_delete() {
        let mut storage = MockCvFileStorage::new();
        storage
            .expect_remove()
            .returning(|_| Err(CvFileStorageError::Io("permission denied".into())));

        let service = DeleteCvApplicationService::new(
            MockCvApplicationRepository {
                existing: Some(row(Some("abc.pdf"))),
            },
            storage,
        );

        assert!(service.execute(3).await.is_ok());
    }

    #[actix_web::test]
    async fn missing_application_is_not_found() {
        let mut storage = MockCvFileStorage::new();
        storage.expect_remove().never();

        let service =
            DeleteCvApplicationService::new(MockCvApplicationRepository { existing: None }, storage);

        let result = service.execute(3).await;

        assert!(matches!(result, Err(DeleteCvApplicationError::NotFound)));
    }
}
