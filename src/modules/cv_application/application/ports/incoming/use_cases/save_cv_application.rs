use async_trait::async_trait;

use crate::cv_application::application::{
    domain::{
        entities::{CvApplication, CvApplicationFields},
        policies::{
            field_rules::ValidationError,
            upload_policy::{CvUpload, UnsupportedFileTypeError},
        },
    },
    ports::outgoing::{CvApplicationRepositoryError, CvFileStorageError},
};

//
// ──────────────────────────────────────────────────────────
// Save Command
// ──────────────────────────────────────────────────────────
//

/// Create (`target == None`) or edit an application, optionally with a new
/// CV document.
#[derive(Debug, Clone)]
pub struct SaveCvApplicationCommand {
    target: Option<i32>,
    fields: CvApplicationFields,
}

impl SaveCvApplicationCommand {
    pub fn create(fields: CvApplicationFields) -> Self {
        Self {
            target: None,
            fields,
        }
    }

    pub fn edit(id: i32, fields: CvApplicationFields) -> Self {
        Self {
            target: Some(id),
            fields,
        }
    }

    pub fn target(&self) -> Option<i32> {
        self.target
    }

    pub fn fields(&self) -> &CvApplicationFields {
        &self.fields
    }

    pub fn into_fields(self) -> CvApplicationFields {
        self.fields
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveCvApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnsupportedFileType(#[from] UnsupportedFileTypeError),

    #[error("CV application not found")]
    NotFound,

    #[error("Degree {0} does not exist")]
    DegreeNotFound(i32),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvApplicationRepositoryError> for SaveCvApplicationError {
    fn from(err: CvApplicationRepositoryError) -> Self {
        match err {
            CvApplicationRepositoryError::NotFound => SaveCvApplicationError::NotFound,
            CvApplicationRepositoryError::Validation(e) => SaveCvApplicationError::Validation(e),
            CvApplicationRepositoryError::DegreeNotFound(id) => {
                SaveCvApplicationError::DegreeNotFound(id)
            }
            CvApplicationRepositoryError::DatabaseError(msg) => {
                SaveCvApplicationError::RepositoryError(msg)
            }
        }
    }
}

impl From<CvFileStorageError> for SaveCvApplicationError {
    fn from(err: CvFileStorageError) -> Self {
        SaveCvApplicationError::StorageError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SaveCvApplicationUseCase: Send + Sync {
    /// An absent or zero-length upload keeps the current `cv_blob`.
    async fn execute(
        &self,
        command: SaveCvApplicationCommand,
        upload: Option<CvUpload>,
    ) -> Result<CvApplication, SaveCvApplicationError>;
}

#[async_trait]
pub trait AttachCvFileUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        upload: CvUpload,
    ) -> Result<CvApplication, SaveCvApplicationError>;
}
