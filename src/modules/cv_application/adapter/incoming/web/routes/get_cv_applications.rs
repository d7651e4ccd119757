use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/applications")]
pub async fn get_cv_applications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.cv_applications.get_list.execute().await {
        Ok(applications) => ApiResponse::success(applications),
        Err(e) => {
            error!("Failed to fetch CV applications: {}", e);
            ApiResponse::internal_error()
        }
    }
}
