use actix_web::{delete, web, Responder};
use tracing::{error, warn};

use crate::degree::application::ports::incoming::use_cases::DeleteUnusedDegreeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/degrees/{id}")]
pub async fn delete_degree_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.degrees.delete_unused.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteUnusedDegreeError::NotFound) => {
            ApiResponse::not_found("DEGREE_NOT_FOUND", "Degree not found")
        }
        Err(DeleteUnusedDegreeError::InUse { references }) => {
            warn!(degree_id = id, references, "Refusing to delete degree in use");
            ApiResponse::conflict(
                "DEGREE_IN_USE",
                &format!("Degree is referenced by {references} CV application(s)"),
            )
        }
        Err(DeleteUnusedDegreeError::RepositoryError(e)) => {
            error!("Repository error deleting degree {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
