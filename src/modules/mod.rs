pub mod cv_application;
pub mod degree;
