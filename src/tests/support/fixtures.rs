use chrono::Utc;

use crate::cv_application::application::domain::entities::CvApplication;

/// Application shaped like the seeded rows: "TestName {id}", "TestLN {id}".
pub fn sample_application(id: i32) -> CvApplication {
    CvApplication {
        id,
        first_name: format!("TestName {id}"),
        last_name: format!("TestLN {id}"),
        email: format!("test{id}@test.com"),
        mobile: None,
        degree_id: None,
        cv_blob: None,
        date_created: Utc::now(),
    }
}
