use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use crate::degree::adapter::outgoing::sea_orm_entity::degrees::{ActiveModel, Column, Entity};
use crate::degree::application::domain::entities::{Degree, DegreeData};
use crate::degree::application::ports::outgoing::{DegreeRepository, DegreeRepositoryError};
use crate::modules::cv_application::adapter::outgoing::sea_orm_entity::cv_applications;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct DegreeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DegreeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_existing<C>(conn: &C, id: i32) -> Result<Degree, DegreeRepositoryError>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(map_db_err)?
            .map(|model| model.to_domain())
            .ok_or(DegreeRepositoryError::NotFound)
    }

    async fn count_references<C>(conn: &C, id: i32) -> Result<u64, DegreeRepositoryError>
    where
        C: ConnectionTrait,
    {
        cv_applications::Entity::find()
            .filter(cv_applications::Column::DegreeId.eq(id))
            .count(conn)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl DegreeRepository for DegreeRepositoryPostgres {
    async fn add(&self, data: DegreeData) -> Result<Degree, DegreeRepositoryError> {
        let model = ActiveModel {
            name: Set(data.into_name()),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn get_all(&self) -> Result<Vec<Degree>, DegreeRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn get(&self, id: i32) -> Result<Degree, DegreeRepositoryError> {
        Self::find_existing(&*self.db, id).await
    }

    async fn update(&self, id: i32, data: DegreeData) -> Result<Degree, DegreeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Self::find_existing(&txn, id).await?;

        let model = ActiveModel {
            id: Set(id),
            name: Set(data.into_name()),
        };
        let updated = model.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_unused(&self, id: i32) -> Result<(), DegreeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Self::find_existing(&txn, id).await?;

        // An open transaction is rolled back when dropped on the early returns.
        let references = Self::count_references(&txn, id).await?;

        if references > 0 {
            return Err(DegreeRepositoryError::InUse { references });
        }

        match Entity::delete_by_id(id).exec(&txn).await {
            Ok(_) => {}
            // Linked after the count; the restrict key refused the delete.
            Err(e) if is_foreign_key_violation(&e) => {
                drop(txn);
                let references = Self::count_references(&*self.db, id).await?;
                return Err(DegreeRepositoryError::InUse {
                    references: references.max(1),
                });
            }
            Err(e) => return Err(map_db_err(e)),
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> DegreeRepositoryError {
    DegreeRepositoryError::DatabaseError(e.to_string())
}

fn is_foreign_key_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

// ============================================================================
// Tests
// ============================================================================
