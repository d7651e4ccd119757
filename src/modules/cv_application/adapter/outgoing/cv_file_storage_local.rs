use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::cv_application::application::domain::policies::upload_policy::UploadPolicy;
use crate::cv_application::application::ports::outgoing::{CvFileStorage, CvFileStorageError};

/// Writes CV documents as plain files under `<files_root>/Files`.
#[derive(Clone, Debug)]
pub struct LocalCvFileStorage {
    files_dir: PathBuf,
}

impl LocalCvFileStorage {
    pub fn new(files_dir: impl Into<PathBuf>) -> Self {
        Self {
            files_dir: files_dir.into(),
        }
    }

    pub fn from_policy(policy: &UploadPolicy) -> Self {
        Self::new(policy.files_dir())
    }

    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    // Only a single plain file name, never a path.
    fn path_for(&self, blob_name: &str) -> Result<PathBuf, CvFileStorageError> {
        let plain = !blob_name.is_empty()
            && blob_name != "."
            && blob_name != ".."
            && !blob_name.contains(['/', '\\'])
            && !blob_name.contains("..");

        if !plain {
            return Err(CvFileStorageError::InvalidBlobName(blob_name.to_string()));
        }

        Ok(self.files_dir.join(blob_name))
    }
}

#[async_trait]
impl CvFileStorage for LocalCvFileStorage {
    async fn store(&self, blob_name: &str, content: &[u8]) -> Result<(), CvFileStorageError> {
        let path = self.path_for(blob_name)?;

        tokio::fs::create_dir_all(&self.files_dir)
            .await
            .map_err(|e| CvFileStorageError::Io(e.to_string()))?;

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| CvFileStorageError::Io(e.to_string()))
    }

    async fn remove(&self, blob_name: &str) -> Result<(), CvFileStorageError> {
        let path = self.path_for(blob_name)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CvFileStorageError::Io(e.to_string())),
        }
    }
}
