pub mod board;
pub mod components;

pub use board::{
    end_of_month, first_of_month, generate_columns, month_key, DragLocation, DragResult, DropOutcome,
    DueDateChange, KanbanBoard, MonthColumn, UpdateResolution, MONTH_COLUMNS,
};
pub use components::*;
