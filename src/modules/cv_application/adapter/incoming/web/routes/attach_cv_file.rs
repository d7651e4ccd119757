use actix_web::{http::header, put, web, HttpRequest, Responder};
use serde::Deserialize;

use super::save_error::map_save_error;
use crate::cv_application::application::domain::policies::upload_policy::CvUpload;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AttachCvFileQuery {
    pub file_name: String,
}

/// Raw document body; the type comes from `Content-Type` and `file_name`.
#[put("/api/applications/{id}/cv")]
pub async fn attach_cv_file_handler(
    path: web::Path<i32>,
    query: web::Query<AttachCvFileQuery>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let upload = CvUpload::new(query.into_inner().file_name, content_type, body.to_vec());

    match data
        .cv_applications
        .attach_file
        .execute(path.into_inner(), upload)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_save_error(e),
    }
}
