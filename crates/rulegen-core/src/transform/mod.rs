pub mod grouping;
pub mod model_shell;
pub mod schema_resolver;

pub use grouping::group_operations;
pub use model_shell::from_model;
