use leptos::prelude::*;

use crate::core::models::Task;
use crate::features::data_table::{CellValue, ColumnDef, TableRow};

impl TableRow for Task {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

/// Columns of the list view. Ids double as the backend's `sort_by` names.
pub fn task_columns() -> Vec<ColumnDef<Task>> {
    vec![
        ColumnDef::new("title", "Title", |t: &Task| CellValue::text(t.title.clone())),
        ColumnDef::new("duedate", "Due Date", |t: &Task| CellValue::from(t.duedate))
            .cell(|t: &Task| t.due_label().into_any()),
        ColumnDef::new("status", "Status", |t: &Task| CellValue::from(t.status.as_deref())).cell(|t: &Task| {
            let label = t.status_label().to_string();
            let class = format!("status-badge {}", Task::badge_class(&label));
            view! { <span class=class>{label}</span> }.into_any()
        }),
        ColumnDef::new("priority", "Priority", |t: &Task| CellValue::from(t.priority.as_deref())).cell(|t: &Task| {
            let label = t.priority_label().to_string();
            let class = format!("priority-badge {}", Task::badge_class(&label));
            view! { <span class=class>{label}</span> }.into_any()
        }),
        ColumnDef::new("assignee_name", "Assigned To", |t: &Task| CellValue::from(t.assignee_name.as_deref()))
            .cell(|t: &Task| t.assignee_label().to_string().into_any()),
        ColumnDef::new("meeting_owner_name", "Owner", |t: &Task| {
            CellValue::from(t.meeting_owner_name.as_deref())
        })
        .sortable(false),
    ]
}
