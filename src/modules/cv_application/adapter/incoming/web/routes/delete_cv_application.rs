use actix_web::{delete, web, Responder};
use tracing::error;

use crate::cv_application::application::ports::incoming::use_cases::DeleteCvApplicationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/applications/{id}")]
pub async fn delete_cv_application_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.cv_applications.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCvApplicationError::NotFound) => {
            ApiResponse::not_found("CV_APPLICATION_NOT_FOUND", "CV application not found")
        }
        Err(DeleteCvApplicationError::RepositoryError(e)) => {
            error!("Repository error deleting CV application {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
