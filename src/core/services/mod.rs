pub mod error;
pub mod style_registry;
pub mod task_service;

pub use error::ApiError;
pub use style_registry::{ensure_stylesheet, StyleRegistry};
pub use task_service::TaskService;
