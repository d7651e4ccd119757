pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::cv_application;
pub use modules::degree;

use crate::config::AppConfig;
use crate::cv_application::adapter::outgoing::{
    CvApplicationRepositoryPostgres, LocalCvFileStorage,
};
use crate::cv_application::application::service::{
    DeleteCvApplicationService, GetCvApplicationsService, SaveCvApplicationService,
};
use crate::cv_application::application::domain::policies::upload_policy::UploadPolicy;
use crate::cv_application::application::CvApplicationUseCases;
use crate::degree::adapter::outgoing::DegreeRepositoryPostgres;
use crate::degree::application::service::{
    CreateDegreeService, DeleteUnusedDegreeService, GetDegreesService, UpdateDegreeService,
};
use crate::degree::application::DegreeUseCases;
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub cv_applications: CvApplicationUseCases,
    pub degrees: DegreeUseCases,
    pub cv_upload_policy: UploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.database_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to database: {e}")))?;

    let db_arc = Arc::new(conn);

    // File storage
    let upload_policy = config.upload_policy();
    let file_storage = LocalCvFileStorage::from_policy(&upload_policy);
    info!(files_dir = %file_storage.files_dir().display(), "CV documents directory");

    // Repositories and use cases
    let application_repo = CvApplicationRepositoryPostgres::new(Arc::clone(&db_arc));
    let degree_repo = DegreeRepositoryPostgres::new(Arc::clone(&db_arc));

    let get_applications = Arc::new(GetCvApplicationsService::new(application_repo.clone()));
    let save_application = Arc::new(SaveCvApplicationService::new(
        upload_policy.clone(),
        application_repo.clone(),
        file_storage.clone(),
    ));

    let cv_applications = CvApplicationUseCases {
        get_list: get_applications.clone(),
        get_single: get_applications,
        save: save_application.clone(),
        attach_file: save_application,
        delete: Arc::new(DeleteCvApplicationService::new(
            application_repo,
            file_storage,
        )),
    };

    let get_degrees = Arc::new(GetDegreesService::new(degree_repo.clone()));

    let degrees = DegreeUseCases {
        create: Arc::new(CreateDegreeService::new(degree_repo.clone())),
        get_list: get_degrees.clone(),
        get_single: get_degrees,
        update: Arc::new(UpdateDegreeService::new(degree_repo.clone())),
        delete_unused: Arc::new(DeleteUnusedDegreeService::new(degree_repo)),
    };

    let max_upload_bytes = upload_policy.max_file_size_bytes;

    let state = AppState {
        cv_applications,
        degrees,
        cv_upload_policy: upload_policy,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // CV applications
    cfg.service(crate::cv_application::adapter::incoming::web::routes::get_cv_applications_handler);
    cfg.service(crate::cv_application::adapter::incoming::web::routes::get_cv_application_handler);
    // Multipart form variants first; they only match `multipart/form-data`.
    cfg.service(
        crate::cv_application::adapter::incoming::web::routes::create_cv_application_form_handler,
    );
    cfg.service(
        crate::cv_application::adapter::incoming::web::routes::update_cv_application_form_handler,
    );
    cfg.service(
        crate::cv_application::adapter::incoming::web::routes::create_cv_application_handler,
    );
    cfg.service(
        crate::cv_application::adapter::incoming::web::routes::update_cv_application_handler,
    );
    cfg.service(crate::cv_application::adapter::incoming::web::routes::attach_cv_file_handler);
    cfg.service(
        crate::cv_application::adapter::incoming::web::routes::delete_cv_application_handler,
    );
    // Degrees
    cfg.service(crate::degree::adapter::incoming::web::routes::get_degrees_handler);
    cfg.service(crate::degree::adapter::incoming::web::routes::get_degree_handler);
    cfg.service(crate::degree::adapter::incoming::web::routes::create_degree_handler);
    cfg.service(crate::degree::adapter::incoming::web::routes::update_degree_handler);
    cfg.service(crate::degree::adapter::incoming::web::routes::delete_degree_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
