use std::sync::Arc;

use crate::cv_application::application::ports::incoming::use_cases::{
    AttachCvFileUseCase, DeleteCvApplicationUseCase, GetCvApplicationUseCase,
    GetCvApplicationsUseCase, SaveCvApplicationUseCase,
};

#[derive(Clone)]
pub struct CvApplicationUseCases {
    pub get_list: Arc<dyn GetCvApplicationsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCvApplicationUseCase + Send + Sync>,
    pub save: Arc<dyn SaveCvApplicationUseCase + Send + Sync>,
    pub attach_file: Arc<dyn AttachCvFileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCvApplicationUseCase + Send + Sync>,
}
