mod create_degree_service;
mod delete_unused_degree_service;
mod get_degrees_service;
mod update_degree_service;

pub use create_degree_service::CreateDegreeService;
pub use delete_unused_degree_service::DeleteUnusedDegreeService;
pub use get_degrees_service::GetDegreesService;
pub use update_degree_service::UpdateDegreeService;
