use actix_multipart::Multipart;
use actix_web::{put, web, Responder};

use super::create_cv_application::CvApplicationRequest;
use super::cv_application_form::{is_multipart_form, map_form_error, CvApplicationForm};
use super::save_error::map_save_error;
use crate::cv_application::application::ports::incoming::use_cases::SaveCvApplicationCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edits applicant fields; the stored document reference is kept.
#[put("/api/applications/{id}")]
pub async fn update_cv_application_handler(
    path: web::Path<i32>,
    req: web::Json<CvApplicationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = SaveCvApplicationCommand::edit(path.into_inner(), req.to_fields());

    match data.cv_applications.save.execute(command, None).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_save_error(e),
    }
}

/// Edits applicant fields; a non-empty `cv_file` part replaces the document.
#[put("/api/applications/{id}", guard = "is_multipart_form")]
pub async fn update_cv_application_form_handler(
    path: web::Path<i32>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let max_file_bytes = data.cv_upload_policy.max_file_size_bytes;
    let form = match CvApplicationForm::read(payload, max_file_bytes).await {
        Ok(form) => form,
        Err(e) => return map_form_error(e),
    };

    let (fields, cv_file) = form.into_parts();
    let command = SaveCvApplicationCommand::edit(path.into_inner(), fields);

    match data.cv_applications.save.execute(command, cv_file).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_save_error(e),
    }
}
