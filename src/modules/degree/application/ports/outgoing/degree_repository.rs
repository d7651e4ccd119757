use async_trait::async_trait;

use crate::degree::application::domain::entities::{Degree, DegreeData};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DegreeRepositoryError {
    #[error("Degree not found")]
    NotFound,

    #[error("Degree is referenced by {references} CV application(s)")]
    InUse { references: u64 },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DegreeRepository: Send + Sync {
    async fn add(&self, data: DegreeData) -> Result<Degree, DegreeRepositoryError>;

    async fn get_all(&self) -> Result<Vec<Degree>, DegreeRepositoryError>;

    async fn get(&self, id: i32) -> Result<Degree, DegreeRepositoryError>;

    async fn update(&self, id: i32, data: DegreeData) -> Result<Degree, DegreeRepositoryError>;

    /// Deletes the degree unless an application still references it.
    /// Returns `InUse` if referenced, `NotFound` if the degree doesn't exist.
    async fn delete_unused(&self, id: i32) -> Result<(), DegreeRepositoryError>;
}
