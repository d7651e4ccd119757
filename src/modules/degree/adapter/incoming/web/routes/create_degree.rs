use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::degree::application::domain::entities::DegreeData;
use crate::degree::application::ports::incoming::use_cases::CreateDegreeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct DegreeRequest {
    pub name: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/degrees")]
pub async fn create_degree_handler(
    req: web::Json<DegreeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let degree_data = match DegreeData::new(&req.name) {
        Ok(d) => d,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.degrees.create.execute(degree_data).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateDegreeError::RepositoryError(e)) => {
            error!("Repository error creating degree: {}", e);
            ApiResponse::internal_error()
        }
    }
}
