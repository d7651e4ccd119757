use actix_web::web;
use std::sync::Arc;

use crate::cv_application::application::ports::incoming::use_cases::{
    AttachCvFileUseCase, DeleteCvApplicationError, DeleteCvApplicationUseCase,
    GetCvApplicationUseCase, GetCvApplicationsUseCase, SaveCvApplicationError,
    SaveCvApplicationUseCase,
};
use crate::cv_application::application::domain::policies::upload_policy::UploadPolicy;
use crate::cv_application::application::CvApplicationUseCases;
use crate::degree::application::ports::incoming::use_cases::{
    CreateDegreeUseCase, DeleteUnusedDegreeError, DeleteUnusedDegreeUseCase, GetDegreeUseCase,
    GetDegreesUseCase, UpdateDegreeError, UpdateDegreeUseCase,
};
use crate::degree::application::DegreeUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    cv_applications: CvApplicationUseCases,
    degrees: DegreeUseCases,
    cv_upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            cv_applications: CvApplicationUseCases {
                get_list: Arc::new(StubGetCvApplicationsUseCase::success(vec![])),
                get_single: Arc::new(StubGetCvApplicationUseCase::not_found()),
                save: Arc::new(StubSaveCvApplicationUseCase::error(
                    SaveCvApplicationError::RepositoryError("not used in this test".into()),
                )),
                attach_file: Arc::new(StubAttachCvFileUseCase::error(
                    SaveCvApplicationError::NotFound,
                )),
                delete: Arc::new(StubDeleteCvApplicationUseCase {
                    result: Err(DeleteCvApplicationError::NotFound),
                }),
            },
            degrees: DegreeUseCases {
                create: Arc::new(StubCreateDegreeUseCase::repo_error("not used in this test")),
                get_list: Arc::new(StubGetDegreesUseCase::success(vec![])),
                get_single: Arc::new(StubGetDegreeUseCase::not_found()),
                update: Arc::new(StubUpdateDegreeUseCase::error(UpdateDegreeError::NotFound)),
                delete_unused: Arc::new(StubDeleteUnusedDegreeUseCase {
                    result: Err(DeleteUnusedDegreeError::NotFound),
                }),
            },
            cv_upload_policy: UploadPolicy::new(UploadPolicy::DEFAULT_FILES_ROOT),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_cv_applications(
        mut self,
        uc: impl GetCvApplicationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cv_applications.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_cv_application(
        mut self,
        uc: impl GetCvApplicationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cv_applications.get_single = Arc::new(uc);
        self
    }

    pub fn with_save_cv_application(
        mut self,
        uc: impl SaveCvApplicationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cv_applications.save = Arc::new(uc);
        self
    }

    pub fn with_attach_cv_file(
        mut self,
        uc: impl AttachCvFileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cv_applications.attach_file = Arc::new(uc);
        self
    }

    pub fn with_delete_cv_application(
        mut self,
        uc: impl DeleteCvApplicationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cv_applications.delete = Arc::new(uc);
        self
    }

    pub fn with_create_degree(
        mut self,
        uc: impl CreateDegreeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.degrees.create = Arc::new(uc);
        self
    }

    pub fn with_get_degrees(mut self, uc: impl GetDegreesUseCase + Send + Sync + 'static) -> Self {
        self.degrees.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_degree(mut self, uc: impl GetDegreeUseCase + Send + Sync + 'static) -> Self {
        self.degrees.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_degree(
        mut self,
        uc: impl UpdateDegreeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.degrees.update = Arc::new(uc);
        self
    }

    pub fn with_delete_unused_degree(
        mut self,
        uc: impl DeleteUnusedDegreeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.degrees.delete_unused = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.cv_upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            cv_applications: self.cv_applications,
            degrees: self.degrees,
            cv_upload_policy: self.cv_upload_policy,
        })
    }
}
