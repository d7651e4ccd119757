pub mod app_state_builder;
pub mod fixtures;
pub mod multipart;
pub mod sqlite;
pub mod stubs;
