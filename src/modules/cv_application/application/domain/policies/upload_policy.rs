use std::fmt;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// An uploaded CV document as received from a client.
#[derive(Debug, Clone)]
pub struct CvUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl CvUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            content,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvDocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl CvDocumentKind {
    pub const ALL: [CvDocumentKind; 3] = [
        CvDocumentKind::Pdf,
        CvDocumentKind::Doc,
        CvDocumentKind::Docx,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            CvDocumentKind::Pdf => "pdf",
            CvDocumentKind::Doc => "doc",
            CvDocumentKind::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            CvDocumentKind::Pdf => "application/pdf",
            CvDocumentKind::Doc => "application/msword",
            CvDocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.extension() == ext)
    }
}

impl fmt::Display for CvDocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("File is not PDF or Word (name={file_name}, content type={content_type})")]
pub struct UnsupportedFileTypeError {
    pub file_name: String,
    pub content_type: String,
}

/// An upload that passed the type check, with the name it will be stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedCvUpload {
    pub kind: CvDocumentKind,
    pub blob_name: String,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub files_root: PathBuf,
    pub max_file_size_bytes: usize,
}

impl UploadPolicy {
    pub const DEFAULT_FILES_ROOT: &'static str = "wwwroot";
    pub const FILES_DIR: &'static str = "Files";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB

    pub fn new(files_root: impl Into<PathBuf>) -> Self {
        Self {
            files_root: files_root.into(),
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }

    /// Directory uploaded documents are written to.
    pub fn files_dir(&self) -> PathBuf {
        self.files_root.join(Self::FILES_DIR)
    }

    /// Accepts PDF and Word documents only. Extension and content type must
    /// both name the same document kind.
    pub fn check(&self, upload: &CvUpload) -> Result<AcceptedCvUpload, UnsupportedFileTypeError> {
        let unsupported = || UnsupportedFileTypeError {
            file_name: upload.file_name.clone(),
            content_type: upload.content_type.clone(),
        };

        let kind = ext_lower(&upload.file_name)
            .as_deref()
            .and_then(CvDocumentKind::from_extension)
            .ok_or_else(unsupported)?;

        if essence(&upload.content_type) != kind.mime_type() {
            return Err(unsupported());
        }

        Ok(AcceptedCvUpload {
            kind,
            blob_name: make_blob_name(Uuid::new_v4(), kind),
        })
    }
}

/// Stored name strategy: `<uuid>.<ext>` (no user-controlled path segments).
pub fn make_blob_name(id: Uuid, kind: CvDocumentKind) -> String {
    format!("{}.{}", id.simple(), kind.extension())
}

fn ext_lower(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
}

// "application/pdf; charset=binary" -> "application/pdf"
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
