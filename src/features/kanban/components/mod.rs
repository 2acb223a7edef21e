pub mod column;
pub mod kanban_view;
pub mod task_card;

pub use column::KanbanColumn;
pub use kanban_view::KanbanView;
pub use task_card::{DragOrigin, TaskCard};
