use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};

use super::cv_application_form::{is_multipart_form, map_form_error, CvApplicationForm};
use super::save_error::map_save_error;
use crate::cv_application::application::domain::entities::CvApplicationFields;
use crate::cv_application::application::ports::incoming::use_cases::SaveCvApplicationCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Applicant fields accepted from clients. `cv_blob` is not part of it; a
/// stored document only comes from an uploaded file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CvApplicationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub degree_id: Option<i32>,
}

impl CvApplicationRequest {
    pub fn to_fields(&self) -> CvApplicationFields {
        CvApplicationFields::new(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.mobile.as_deref(),
            self.degree_id,
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/applications")]
pub async fn create_cv_application_handler(
    req: web::Json<CvApplicationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = SaveCvApplicationCommand::create(req.to_fields());

    match data.cv_applications.save.execute(command, None).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => map_save_error(e),
    }
}

/// Same as the JSON create, with an optional `cv_file` part saved alongside.
#[post("/api/applications", guard = "is_multipart_form")]
pub async fn create_cv_application_form_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let max_file_bytes = data.cv_upload_policy.max_file_size_bytes;
    let form = match CvApplicationForm::read(payload, max_file_bytes).await {
        Ok(form) => form,
        Err(e) => return map_form_error(e),
    };

    let (fields, cv_file) = form.into_parts();
    let command = SaveCvApplicationCommand::create(fields);

    match data.cv_applications.save.execute(command, cv_file).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => map_save_error(e),
    }
}
