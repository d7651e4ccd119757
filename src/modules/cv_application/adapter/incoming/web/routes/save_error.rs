use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::cv_application::application::ports::incoming::use_cases::SaveCvApplicationError;
use crate::shared::api::ApiResponse;

pub(super) fn map_save_error(err: SaveCvApplicationError) -> HttpResponse {
    match err {
        SaveCvApplicationError::Validation(e) => {
            warn!(field = e.field(), "Rejected CV application: {}", e);
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        SaveCvApplicationError::DegreeNotFound(id) => {
            warn!(degree_id = id, "Rejected CV application with unknown degree");
            ApiResponse::bad_request("DEGREE_NOT_FOUND", &format!("Degree {id} does not exist"))
        }
        SaveCvApplicationError::UnsupportedFileType(e) => {
            warn!("Rejected CV upload: {}", e);
            ApiResponse::unsupported_media_type("UNSUPPORTED_FILE_TYPE", &e.to_string())
        }
        SaveCvApplicationError::NotFound => {
            ApiResponse::not_found("CV_APPLICATION_NOT_FOUND", "CV application not found")
        }
        SaveCvApplicationError::StorageError(e) => {
            error!("Storage error saving CV application: {}", e);
            ApiResponse::internal_error()
        }
        SaveCvApplicationError::RepositoryError(e) => {
            error!("Repository error saving CV application: {}", e);
            ApiResponse::internal_error()
        }
    }
}
