use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
    SqlErr, TransactionTrait,
};
use std::sync::Arc;

use crate::cv_application::adapter::outgoing::sea_orm_entity::cv_applications::{
    ActiveModel, Column, Entity,
};
use crate::cv_application::application::domain::entities::{CvApplication, CvApplicationData};
use crate::cv_application::application::ports::outgoing::{
    CvApplicationRepository, CvApplicationRepositoryError,
};
use crate::modules::degree::adapter::outgoing::sea_orm_entity::degrees;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CvApplicationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvApplicationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn ensure_degree_exists<C>(
        conn: &C,
        degree_id: Option<i32>,
    ) -> Result<(), CvApplicationRepositoryError>
    where
        C: ConnectionTrait,
    {
        let Some(degree_id) = degree_id else {
            return Ok(());
        };

        let found = degrees::Entity::find_by_id(degree_id)
            .one(conn)
            .await
            .map_err(map_db_err)?;

        match found {
            Some(_) => Ok(()),
            None => Err(CvApplicationRepositoryError::DegreeNotFound(degree_id)),
        }
    }
}

#[async_trait]
impl CvApplicationRepository for CvApplicationRepositoryPostgres {
    async fn add(
        &self,
        data: CvApplicationData,
    ) -> Result<CvApplication, CvApplicationRepositoryError> {
        data.validate()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let degree_id = data.degree_id;
        Self::ensure_degree_exists(&txn, degree_id).await?;

        let model = ActiveModel {
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            mobile: Set(data.mobile),
            degree_id: Set(data.degree_id),
            cv_blob: Set(data.cv_blob),
            date_created: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| map_write_err(e, degree_id))?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn get_all(&self) -> Result<Vec<CvApplication>, CvApplicationRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn get(&self, id: i32) -> Result<CvApplication, CvApplicationRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .ok_or(CvApplicationRepositoryError::NotFound)
    }

    async fn exists(&self, id: i32) -> Result<bool, CvApplicationRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn update(
        &self,
        id: i32,
        data: CvApplicationData,
    ) -> Result<CvApplication, CvApplicationRepositoryError> {
        data.validate()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(CvApplicationRepositoryError::NotFound)?;

        let degree_id = data.degree_id;
        Self::ensure_degree_exists(&txn, degree_id).await?;

        // date_created stays as first written.
        let mut model: ActiveModel = existing.into();
        model.first_name = Set(data.first_name);
        model.last_name = Set(data.last_name);
        model.email = Set(data.email);
        model.mobile = Set(data.mobile);
        model.degree_id = Set(data.degree_id);
        model.cv_blob = Set(data.cv_blob);

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| map_write_err(e, degree_id))?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, id: i32) -> Result<(), CvApplicationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CvApplicationRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> CvApplicationRepositoryError {
    CvApplicationRepositoryError::DatabaseError(e.to_string())
}

// The degree can vanish between the existence check and the write.
fn map_write_err(e: DbErr, degree_id: Option<i32>) -> CvApplicationRepositoryError {
    match (e.sql_err(), degree_id) {
        (Some(SqlErr::ForeignKeyConstraintViolation(_)), Some(id)) => {
            CvApplicationRepositoryError::DegreeNotFound(id)
        }
        _ => map_db_err(e),
    }
}

// ============================================================================
// Tests
// ============================================================================
