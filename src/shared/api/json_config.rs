use actix_web::web::JsonConfig;
use tracing::warn;

use crate::shared::api::ApiResponse;

/// Applicant and degree bodies are a handful of short strings.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Undecodable or oversized JSON answers 400 `VALIDATION_ERROR` in the
/// usual envelope instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, req| {
            let message = err.to_string();
            warn!(path = %req.path(), "Rejected JSON body: {}", message);

            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
