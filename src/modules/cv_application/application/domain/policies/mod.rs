pub mod field_rules;
pub mod upload_policy;
