use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema, Set,
};

use crate::cv_application::adapter::outgoing::sea_orm_entity::cv_applications;
use crate::degree::adapter::outgoing::sea_orm_entity::degrees;

pub const SEEDED_DEGREES: i32 = 10;
pub const SEEDED_APPLICATIONS: i32 = 10;

/// Fresh in-memory database with the schema built from the entities.
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("in-memory sqlite should connect");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    db.execute(backend.build(&schema.create_table_from_entity(degrees::Entity)))
        .await
        .expect("create degrees");
    db.execute(backend.build(&schema.create_table_from_entity(cv_applications::Entity)))
        .await
        .expect("create cv_applications");

    Arc::new(db)
}

/// Seeds degrees 1..=10 and applications 1..=10. Odd applications reference
/// degree 1; no application references any other degree.
pub async fn setup_seeded_db() -> Arc<DatabaseConnection> {
    let db = setup_db().await;

    for i in 1..=SEEDED_DEGREES {
        degrees::ActiveModel {
            name: Set(format!("Test Degree {i}")),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .expect("seed degree");
    }

    for i in 1..=SEEDED_APPLICATIONS {
        cv_applications::ActiveModel {
            first_name: Set(format!("TestName {i}")),
            last_name: Set(format!("TestLN {i}")),
            email: Set(format!("test{i}@test.com")),
            mobile: Set(None),
            degree_id: Set((i % 2 == 1).then_some(1)),
            cv_blob: Set(None),
            date_created: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .expect("seed application");
    }

    db
}
