mod degree_repository_postgres;
pub mod sea_orm_entity;

pub use degree_repository_postgres::DegreeRepositoryPostgres;
