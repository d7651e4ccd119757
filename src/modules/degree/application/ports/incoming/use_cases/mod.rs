mod create_degree;
mod delete_unused_degree;
mod get_degrees;
mod update_degree;

pub use create_degree::{CreateDegreeError, CreateDegreeUseCase};
pub use delete_unused_degree::{DeleteUnusedDegreeError, DeleteUnusedDegreeUseCase};
pub use get_degrees::{GetDegreeError, GetDegreeUseCase, GetDegreesError, GetDegreesUseCase};
pub use update_degree::{UpdateDegreeError, UpdateDegreeUseCase};
