mod create_degree;
mod delete_degree;
mod get_degree;
mod get_degrees;
mod update_degree;

pub use create_degree::create_degree_handler;
pub use delete_degree::delete_degree_handler;
pub use get_degree::get_degree_handler;
pub use get_degrees::get_degrees_handler;
pub use update_degree::update_degree_handler;
