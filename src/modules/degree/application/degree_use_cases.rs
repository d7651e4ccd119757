use std::sync::Arc;

use crate::degree::application::ports::incoming::use_cases::{
    CreateDegreeUseCase, DeleteUnusedDegreeUseCase, GetDegreeUseCase, GetDegreesUseCase,
    UpdateDegreeUseCase,
};

#[derive(Clone)]
pub struct DegreeUseCases {
    pub create: Arc<dyn CreateDegreeUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetDegreesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetDegreeUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateDegreeUseCase + Send + Sync>,
    pub delete_unused: Arc<dyn DeleteUnusedDegreeUseCase + Send + Sync>,
}
