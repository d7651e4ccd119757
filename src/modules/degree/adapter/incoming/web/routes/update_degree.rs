use actix_web::{put, web, Responder};
use tracing::error;

use super::create_degree::DegreeRequest;
use crate::degree::application::domain::entities::DegreeData;
use crate::degree::application::ports::incoming::use_cases::UpdateDegreeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/degrees/{id}")]
pub async fn update_degree_handler(
    path: web::Path<i32>,
    req: web::Json<DegreeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let degree_data = match DegreeData::new(&req.name) {
        Ok(d) => d,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.degrees.update.execute(id, degree_data).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateDegreeError::NotFound) => {
            ApiResponse::not_found("DEGREE_NOT_FOUND", "Degree not found")
        }
        Err(UpdateDegreeError::RepositoryError(e)) => {
            error!("Repository error updating degree {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
