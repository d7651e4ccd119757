use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CvFileStorageError {
    #[error("Invalid blob name: {0}")]
    InvalidBlobName(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Where accepted CV documents end up. The blob name is the reference kept
/// in `cv_applications.cv_blob`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CvFileStorage: Send + Sync {
    async fn store(&self, blob_name: &str, content: &[u8]) -> Result<(), CvFileStorageError>;

    /// Removing a blob that is already gone is not an error.
    async fn remove(&self, blob_name: &str) -> Result<(), CvFileStorageError>;
}
