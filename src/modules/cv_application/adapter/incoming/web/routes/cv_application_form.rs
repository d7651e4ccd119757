use actix_multipart::{Field, Multipart};
use actix_web::{guard::GuardContext, http::header, http::StatusCode, HttpResponse};
use futures::StreamExt;
use tracing::warn;

use crate::cv_application::application::domain::entities::CvApplicationFields;
use crate::cv_application::application::domain::policies::upload_policy::CvUpload;
use crate::shared::api::ApiResponse;

const TEXT_FIELD_MAX_BYTES: usize = 1024;

/// Name of the form part carrying the CV document.
pub const CV_FILE_PART: &str = "cv_file";

pub fn is_multipart_form(ctx: &GuardContext) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

#[derive(Debug, thiserror::Error)]
pub enum CvApplicationFormError {
    #[error("Malformed form: {0}")]
    Malformed(String),

    #[error("{field} is longer than {max} bytes")]
    FieldTooLong { field: String, max: usize },

    #[error("degree_id must be an integer (got {0:?})")]
    InvalidDegreeId(String),

    #[error("CV file is larger than {max} bytes")]
    FileTooLarge { max: usize },
}

/// Applicant fields plus an optional CV document, sent as
/// `multipart/form-data`. Unknown parts are skipped.
#[derive(Debug, Default)]
pub struct CvApplicationForm {
    first_name: String,
    last_name: String,
    email: String,
    mobile: Option<String>,
    degree_id: Option<i32>,
    cv_file: Option<CvUpload>,
}

impl CvApplicationForm {
    pub async fn read(
        mut payload: Multipart,
        max_file_bytes: usize,
    ) -> Result<Self, CvApplicationFormError> {
        let mut form = Self::default();

        while let Some(field) = payload.next().await {
            let mut field = field.map_err(|e| CvApplicationFormError::Malformed(e.to_string()))?;
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "first_name" => form.first_name = read_text(&mut field, &name).await?,
                "last_name" => form.last_name = read_text(&mut field, &name).await?,
                "email" => form.email = read_text(&mut field, &name).await?,
                "mobile" => form.mobile = Some(read_text(&mut field, &name).await?),
                "degree_id" => {
                    let raw = read_text(&mut field, &name).await?;
                    let raw = raw.trim();
                    form.degree_id = if raw.is_empty() {
                        None
                    } else {
                        Some(raw.parse().map_err(|_| {
                            CvApplicationFormError::InvalidDegreeId(raw.to_string())
                        })?)
                    };
                }
                CV_FILE_PART => {
                    let file_name = field
                        .content_disposition()
                        .and_then(|cd| cd.get_filename())
                        .unwrap_or_default()
                        .to_string();
                    let content_type = field
                        .content_type()
                        .map(|m| m.to_string())
                        .unwrap_or_default();
                    let content = read_bytes(&mut field, max_file_bytes)
                        .await
                        .map_err(|e| match e {
                            ReadError::TooLong => {
                                CvApplicationFormError::FileTooLarge { max: max_file_bytes }
                            }
                            ReadError::Multipart(msg) => CvApplicationFormError::Malformed(msg),
                        })?;

                    // A file input left empty still sends a part with no content.
                    form.cv_file = Some(CvUpload::new(file_name, content_type, content))
                        .filter(|u| !u.is_empty());
                }
                _ => skip(&mut field).await?,
            }
        }

        Ok(form)
    }

    pub fn into_parts(self) -> (CvApplicationFields, Option<CvUpload>) {
        let fields = CvApplicationFields::new(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.mobile.as_deref(),
            self.degree_id,
        );
        (fields, self.cv_file)
    }
}

pub fn map_form_error(e: CvApplicationFormError) -> HttpResponse {
    warn!("Rejected CV application form: {}", e);

    match e {
        CvApplicationFormError::FileTooLarge { .. } => ApiResponse::error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "FILE_TOO_LARGE",
            &e.to_string(),
        ),
        _ => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    }
}

#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error("part is too long")]
    TooLong,

    #[error("{0}")]
    Multipart(String),
}

async fn read_bytes(field: &mut Field, limit: usize) -> Result<Vec<u8>, ReadError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| ReadError::Multipart(e.to_string()))?;
        if buf.len().saturating_add(chunk.len()) > limit {
            return Err(ReadError::TooLong);
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

async fn skip(field: &mut Field) -> Result<(), CvApplicationFormError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| CvApplicationFormError::Malformed(e.to_string()))?;
    }
    Ok(())
}

async fn read_text(field: &mut Field, name: &str) -> Result<String, CvApplicationFormError> {
    let bytes = read_bytes(field, TEXT_FIELD_MAX_BYTES)
        .await
        .map_err(|e| match e {
            ReadError::TooLong => CvApplicationFormError::FieldTooLong {
                field: name.to_string(),
                max: TEXT_FIELD_MAX_BYTES,
            },
            ReadError::Multipart(msg) => CvApplicationFormError::Malformed(msg),
        })?;

    String::from_utf8(bytes)
        .map_err(|_| CvApplicationFormError::Malformed(format!("{name} is not valid UTF-8")))
}
