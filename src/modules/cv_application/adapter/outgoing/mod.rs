mod cv_application_repository_postgres;
mod cv_file_storage_local;
pub mod sea_orm_entity;

pub use cv_application_repository_postgres::CvApplicationRepositoryPostgres;
pub use cv_file_storage_local::LocalCvFileStorage;
