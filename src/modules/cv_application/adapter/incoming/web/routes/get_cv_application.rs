use actix_web::{get, web, Responder};
use tracing::error;

use crate::cv_application::application::ports::incoming::use_cases::GetCvApplicationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/applications/{id}")]
pub async fn get_cv_application_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.cv_applications.get_single.execute(id).await {
        Ok(application) => ApiResponse::success(application),
        Err(GetCvApplicationError::NotFound) => {
            ApiResponse::not_found("CV_APPLICATION_NOT_FOUND", "CV application not found")
        }
        Err(GetCvApplicationError::RepositoryError(e)) => {
            error!("Failed to fetch CV application {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
