use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/degrees")]
pub async fn get_degrees_handler(data: web::Data<AppState>) -> impl Responder {
    match data.degrees.get_list.execute().await {
        Ok(degrees) => ApiResponse::success(degrees),
        Err(e) => {
            error!("Failed to fetch degrees: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::degree::application::domain::entities::Degree;
    use crate::degree::application::ports::incoming::use_cases::GetDegreesError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubGetDegreesUseCase;

    #[actix_web::test]
    async fn lists_degrees() {
        let app_state = TestAppStateBuilder::default()
            .with_get_degrees(StubGetDegreesUseCase::success(vec![
                Degree {
                    id: 1,
                    name: "BSc Informatics".into(),
                },
                Degree {
                    id: 2,
                    name: "MSc Informatics".into(),
                },
            ]))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_degrees_handler)).await;

        let req = test::TestRequest::get().uri("/api/degrees").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["data"][1]["name"], "MSc Informatics");
    }

    #[actix_web::test]
    async fn repository_error_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_degrees(StubGetDegreesUseCase::error(
                GetDegreesError::RepositoryError("db down".into()),
            ))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_degrees_handler)).await;

        let req = test::TestRequest::get().uri("/api/degrees").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
