use email_address::{EmailAddress, Options};

use crate::cv_application::application::domain::entities::CvApplicationData;

pub const FIRST_NAME_MAX_LEN: usize = 20;
pub const LAST_NAME_MAX_LEN: usize = 20;
pub const MOBILE_MAX_LEN: usize = 10;
pub const CV_BLOB_MAX_LEN: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field } | ValidationError::TooLong { field, .. } => field,
            ValidationError::InvalidEmail(_) => "email",
        }
    }
}

/// Checks every constraint of an application row; the first violation wins.
pub fn validate(data: &CvApplicationData) -> Result<(), ValidationError> {
    required("first_name", &data.first_name)?;
    max_len("first_name", &data.first_name, FIRST_NAME_MAX_LEN)?;

    required("last_name", &data.last_name)?;
    max_len("last_name", &data.last_name, LAST_NAME_MAX_LEN)?;

    required("email", &data.email)?;
    // Bare address only, no "Name <addr>" form.
    let email_options = Options::default().without_display_text();
    if EmailAddress::parse_with_options(&data.email, email_options).is_err() {
        return Err(ValidationError::InvalidEmail(data.email.clone()));
    }

    if let Some(mobile) = &data.mobile {
        max_len("mobile", mobile, MOBILE_MAX_LEN)?;
    }

    if let Some(cv_blob) = &data.cv_blob {
        max_len("cv_blob", cv_blob, CV_BLOB_MAX_LEN)?;
    }

    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
