mod delete_cv_application_service;
mod get_cv_applications_service;
mod save_cv_application_service;

pub use delete_cv_application_service::DeleteCvApplicationService;
pub use get_cv_applications_service::GetCvApplicationsService;
pub use save_cv_application_service::SaveCvApplicationService;
