use serde::{Deserialize, Serialize};

pub const DEGREE_NAME_MAX_LEN: usize = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Degree {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DegreeNameError {
    #[error("Degree name cannot be empty")]
    Empty,

    #[error("Degree name too long (max {} characters)", DEGREE_NAME_MAX_LEN)]
    TooLong,
}

// Input for add/update. Only constructible through `new`, so a repository
// never sees an unchecked name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeData {
    name: String,
}

impl DegreeData {
    pub fn new(name: &str) -> Result<Self, DegreeNameError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(DegreeNameError::Empty);
        }

        if name.chars().count() > DEGREE_NAME_MAX_LEN {
            return Err(DegreeNameError::TooLong);
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}
