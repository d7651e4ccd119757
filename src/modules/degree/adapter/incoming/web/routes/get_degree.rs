use actix_web::{get, web, Responder};
use tracing::error;

use crate::degree::application::ports::incoming::use_cases::GetDegreeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/degrees/{id}")]
pub async fn get_degree_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();

    match data.degrees.get_single.execute(id).await {
        Ok(degree) => ApiResponse::success(degree),
        Err(GetDegreeError::NotFound) => {
            ApiResponse::not_found("DEGREE_NOT_FOUND", "Degree not found")
        }
        Err(GetDegreeError::RepositoryError(e)) => {
            error!("Failed to fetch degree {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
