pub mod task;

pub use task::{
    parse_due_date, DueDateUpdateRequest, DueDateUpdateResponse, ErrorBody, Task, TaskFilter, TaskId,
    TaskListResponse, CLOSED_STATUSES,
};
