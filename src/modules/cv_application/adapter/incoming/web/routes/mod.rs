mod attach_cv_file;
mod create_cv_application;
mod cv_application_form;
mod delete_cv_application;
mod get_cv_application;
mod get_cv_applications;
mod save_error;
mod update_cv_application;

pub use attach_cv_file::attach_cv_file_handler;
pub use create_cv_application::{
    create_cv_application_form_handler, create_cv_application_handler,
};
pub use delete_cv_application::delete_cv_application_handler;
pub use get_cv_application::get_cv_application_handler;
pub use get_cv_applications::get_cv_applications_handler;
pub use update_cv_application::{
    update_cv_application_form_handler, update_cv_application_handler,
};
