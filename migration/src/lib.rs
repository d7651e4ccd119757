pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_degrees_table;
mod m20250101_000002_create_cv_applications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_degrees_table::Migration),
            Box::new(m20250101_000002_create_cv_applications_table::Migration),
        ]
    }
}
