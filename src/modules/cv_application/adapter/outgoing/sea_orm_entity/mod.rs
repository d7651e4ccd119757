pub mod cv_applications;
