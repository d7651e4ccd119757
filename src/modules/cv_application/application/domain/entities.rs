use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::policies::field_rules::{self, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CvApplication {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub degree_id: Option<i32>,
    pub cv_blob: Option<String>,
    pub date_created: DateTime<Utc>,
}

// Everything the repository writes for an application. `cv_blob` is only ever
// filled from an accepted upload or copied from the stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct CvApplicationData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub degree_id: Option<i32>,
    pub cv_blob: Option<String>,
}

impl CvApplicationData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        field_rules::validate(self)
    }

    pub fn from_fields(fields: CvApplicationFields, cv_blob: Option<String>) -> Self {
        Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            mobile: fields.mobile,
            degree_id: fields.degree_id,
            cv_blob,
        }
    }
}

impl From<&CvApplication> for CvApplicationData {
    fn from(application: &CvApplication) -> Self {
        Self {
            first_name: application.first_name.clone(),
            last_name: application.last_name.clone(),
            email: application.email.clone(),
            mobile: application.mobile.clone(),
            degree_id: application.degree_id,
            cv_blob: application.cv_blob.clone(),
        }
    }
}

/// Applicant-editable fields, as submitted by a client.
///
/// Holds no `cv_blob`: the stored document reference only changes through an
/// accepted upload.
#[derive(Debug, Clone, PartialEq)]
pub struct CvApplicationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub degree_id: Option<i32>,
}

impl CvApplicationFields {
    /// Trims every text field; an empty mobile number is treated as absent.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        mobile: Option<&str>,
        degree_id: Option<i32>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            mobile: mobile
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            degree_id,
        }
    }
}

impl From<&CvApplication> for CvApplicationFields {
    fn from(application: &CvApplication) -> Self {
        Self {
            first_name: application.first_name.clone(),
            last_name: application.last_name.clone(),
            email: application.email.clone(),
            mobile: application.mobile.clone(),
            degree_id: application.degree_id,
        }
    }
}
