use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::cv_application::application::domain::entities::{
    CvApplication, CvApplicationFields,
};
use crate::cv_application::application::domain::policies::upload_policy::CvUpload;
use crate::cv_application::application::ports::incoming::use_cases::{
    AttachCvFileUseCase, DeleteCvApplicationError, DeleteCvApplicationUseCase,
    GetCvApplicationError, GetCvApplicationUseCase, GetCvApplicationsError,
    GetCvApplicationsUseCase, SaveCvApplicationCommand, SaveCvApplicationError,
    SaveCvApplicationUseCase,
};
use crate::degree::application::domain::entities::{Degree, DegreeData};
use crate::degree::application::ports::incoming::use_cases::{
    CreateDegreeError, CreateDegreeUseCase, DeleteUnusedDegreeError, DeleteUnusedDegreeUseCase,
    GetDegreeError, GetDegreeUseCase, GetDegreesError, GetDegreesUseCase, UpdateDegreeError,
    UpdateDegreeUseCase,
};

/* --------------------------------------------------
 * CV applications
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetCvApplicationsUseCase {
    result: Result<Vec<CvApplication>, GetCvApplicationsError>,
}

impl StubGetCvApplicationsUseCase {
    pub fn success(applications: Vec<CvApplication>) -> Self {
        Self {
            result: Ok(applications),
        }
    }

    pub fn error(err: GetCvApplicationsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetCvApplicationsUseCase for StubGetCvApplicationsUseCase {
    async fn execute(&self) -> Result<Vec<CvApplication>, GetCvApplicationsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetCvApplicationUseCase {
    result: Result<CvApplication, GetCvApplicationError>,
}

impl StubGetCvApplicationUseCase {
    pub fn success(application: CvApplication) -> Self {
        Self {
            result: Ok(application),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetCvApplicationError::NotFound),
        }
    }
}

#[async_trait]
impl GetCvApplicationUseCase for StubGetCvApplicationUseCase {
    async fn execute(&self, _id: i32) -> Result<CvApplication, GetCvApplicationError> {
        self.result.clone()
    }
}

/// Records the target and fields of the last call.
#[derive(Clone)]
pub struct StubSaveCvApplicationUseCase {
    result: Result<CvApplication, SaveCvApplicationError>,
    pub seen: Arc<Mutex<Option<(Option<i32>, CvApplicationFields)>>>,
    pub uploaded: Arc<Mutex<Option<CvUpload>>>,
}

impl StubSaveCvApplicationUseCase {
    pub fn success(application: CvApplication) -> Self {
        Self {
            result: Ok(application),
            seen: Arc::default(),
            uploaded: Arc::default(),
        }
    }

    pub fn error(err: SaveCvApplicationError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::default(),
            uploaded: Arc::default(),
        }
    }
}

#[async_trait]
impl SaveCvApplicationUseCase for StubSaveCvApplicationUseCase {
    async fn execute(
        &self,
        command: SaveCvApplicationCommand,
        upload: Option<CvUpload>,
    ) -> Result<CvApplication, SaveCvApplicationError> {
        if let Ok(mut seen) = self.seen.lock() {
            *seen = Some((command.target(), command.into_fields()));
        }
        if let Ok(mut uploaded) = self.uploaded.lock() {
            *uploaded = upload;
        }
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubAttachCvFileUseCase {
    result: Result<CvApplication, SaveCvApplicationError>,
    pub seen: Arc<Mutex<Option<(i32, CvUpload)>>>,
}

impl StubAttachCvFileUseCase {
    pub fn success(application: CvApplication) -> Self {
        Self {
            result: Ok(application),
            seen: Arc::default(),
        }
    }

    pub fn error(err: SaveCvApplicationError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::default(),
        }
    }
}

#[async_trait]
impl AttachCvFileUseCase for StubAttachCvFileUseCase {
    async fn execute(
        &self,
        id: i32,
        upload: CvUpload,
    ) -> Result<CvApplication, SaveCvApplicationError> {
        if let Ok(mut seen) = self.seen.lock() {
            *seen = Some((id, upload));
        }
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteCvApplicationUseCase {
    pub result: Result<(), DeleteCvApplicationError>,
}

#[async_trait]
impl DeleteCvApplicationUseCase for StubDeleteCvApplicationUseCase {
    async fn execute(&self, _id: i32) -> Result<(), DeleteCvApplicationError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Degrees
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateDegreeUseCase {
    result: Result<Degree, CreateDegreeError>,
}

impl StubCreateDegreeUseCase {
    pub fn success(degree: Degree) -> Self {
        Self { result: Ok(degree) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateDegreeError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateDegreeUseCase for StubCreateDegreeUseCase {
    async fn execute(&self, _data: DegreeData) -> Result<Degree, CreateDegreeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetDegreesUseCase {
    result: Result<Vec<Degree>, GetDegreesError>,
}

impl StubGetDegreesUseCase {
    pub fn success(degrees: Vec<Degree>) -> Self {
        Self {
            result: Ok(degrees),
        }
    }

    pub fn error(err: GetDegreesError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetDegreesUseCase for StubGetDegreesUseCase {
    async fn execute(&self) -> Result<Vec<Degree>, GetDegreesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetDegreeUseCase {
    result: Result<Degree, GetDegreeError>,
}

impl StubGetDegreeUseCase {
    pub fn success(degree: Degree) -> Self {
        Self { result: Ok(degree) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetDegreeError::NotFound),
        }
    }
}

#[async_trait]
impl GetDegreeUseCase for StubGetDegreeUseCase {
    async fn execute(&self, _id: i32) -> Result<Degree, GetDegreeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateDegreeUseCase {
    result: Result<Degree, UpdateDegreeError>,
}

impl StubUpdateDegreeUseCase {
    pub fn success(degree: Degree) -> Self {
        Self { result: Ok(degree) }
    }

    pub fn error(err: UpdateDegreeError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateDegreeUseCase for StubUpdateDegreeUseCase {
    async fn execute(&self, _id: i32, _data: DegreeData) -> Result<Degree, UpdateDegreeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteUnusedDegreeUseCase {
    pub result: Result<(), DeleteUnusedDegreeError>,
}

#[async_trait]
impl DeleteUnusedDegreeUseCase for StubDeleteUnusedDegreeUseCase {
    async fn execute(&self, _id: i32) -> Result<(), DeleteUnusedDegreeError> {
        self.result.clone()
    }
}
