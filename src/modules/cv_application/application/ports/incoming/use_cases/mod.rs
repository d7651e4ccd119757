mod delete_cv_application;
mod get_cv_applications;
mod save_cv_application;

pub use delete_cv_application::{DeleteCvApplicationError, DeleteCvApplicationUseCase};
pub use get_cv_applications::{
    GetCvApplicationError, GetCvApplicationUseCase, GetCvApplicationsError,
    GetCvApplicationsUseCase,
};
pub use save_cv_application::{
    AttachCvFileUseCase, SaveCvApplicationCommand, SaveCvApplicationError,
    SaveCvApplicationUseCase,
};
