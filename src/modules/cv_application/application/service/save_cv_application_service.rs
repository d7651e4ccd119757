use async_trait::async_trait;
use tracing::{info, warn};

use crate::cv_application::application::domain::entities::{CvApplication, CvApplicationData};
use crate::cv_application::application::domain::policies::upload_policy::{
    AcceptedCvUpload, CvUpload, UploadPolicy,
};
use crate::cv_application::application::ports::incoming::use_cases::{
    AttachCvFileUseCase, SaveCvApplicationCommand, SaveCvApplicationError,
    SaveCvApplicationUseCase,
};
use crate::cv_application::application::ports::outgoing::{CvApplicationRepository, CvFileStorage};

pub struct SaveCvApplicationService<R, S>
where
    R: CvApplicationRepository,
    S: CvFileStorage,
{
    policy: UploadPolicy,
    repository: R,
    storage: S,
}

impl<R, S> SaveCvApplicationService<R, S>
where
    R: CvApplicationRepository,
    S: CvFileStorage,
{
    pub fn new(policy: UploadPolicy, repository: R, storage: S) -> Self {
        Self {
            policy,
            repository,
            storage,
        }
    }

    async fn discard(&self, blob_name: &str) {
        match self.storage.remove(blob_name).await {
            Ok(()) => info!(blob = blob_name, "Removed CV document"),
            Err(e) => warn!(blob = blob_name, "Failed to remove CV document: {}", e),
        }
    }
}

#[async_trait]
impl<R, S> SaveCvApplicationUseCase for SaveCvApplicationService<R, S>
where
    R: CvApplicationRepository + Send + Sync,
    S: CvFileStorage + Send + Sync,
{
    async fn execute(
        &self,
        command: SaveCvApplicationCommand,
        upload: Option<CvUpload>,
    ) -> Result<CvApplication, SaveCvApplicationError> {
        // 1) Classify the upload. Zero-length counts as no upload.
        let upload = upload.filter(|u| !u.is_empty());
        let accepted: Option<(AcceptedCvUpload, CvUpload)> = match upload {
            Some(u) => Some((self.policy.check(&u)?, u)),
            None => None,
        };

        // 2) When editing, the stored blob is kept unless replaced.
        let target = command.target();
        let previous_blob = match target {
            Some(id) => self.repository.get(id).await?.cv_blob,
            None => None,
        };

        let cv_blob = accepted
            .as_ref()
            .map(|(a, _)| a.blob_name.clone())
            .or_else(|| previous_blob.clone());
        let data = CvApplicationData::from_fields(command.into_fields(), cv_blob);

        // 3) Reject bad input before anything is written.
        data.validate()?;

        // 4) Store the document.
        if let Some((accepted, upload)) = &accepted {
            self.storage
                .store(&accepted.blob_name, &upload.content)
                .await?;
            info!(
                blob = %accepted.blob_name,
                kind = %accepted.kind,
                bytes = upload.len(),
                "Stored CV document"
            );
        }

        // 5) Persist, undoing the file write on failure.
        let saved = match target {
            Some(id) => self.repository.update(id, data).await,
            None => self.repository.add(data).await,
        };

        let saved = match saved {
            Ok(saved) => saved,
            Err(e) => {
                if let Some((accepted, _)) = &accepted {
                    self.discard(&accepted.blob_name).await;
                }
                return Err(e.into());
            }
        };

        // 6) A replaced document is no longer referenced.
        if let (Some(_), Some(old)) = (&accepted, &previous_blob) {
            self.discard(old).await;
        }

        Ok(saved)
    }
}

#[async_trait]
impl<R, S> AttachCvFileUseCase for SaveCvApplicationService<R, S>
where
    R: CvApplicationRepository + Send + Sync,
    S: CvFileStorage + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        upload: CvUpload,
    ) -> Result<CvApplication, SaveCvApplicationError> {
        let existing = self.repository.get(id).await?;
        let command = SaveCvApplicationCommand::edit(id, (&existing).into());

        SaveCvApplicationUseCase::execute(self, command, Some(upload)).await
    }
}
