pub mod columns;
pub mod components;
pub mod filters;
pub mod hooks;

pub use columns::task_columns;
pub use components::*;
pub use filters::{apply_filters, matches_search, QuickFilter, TaskMetrics};
pub use hooks::*;
