use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::{Task, TaskId};
use crate::features::kanban::board::DragLocation;

/// Where a drag started.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOrigin {
    pub task_id: TaskId,
    pub location: DragLocation,
}

#[component]
pub fn TaskCard(
    task: Task,
    location: DragLocation,
    dragging: RwSignal<Option<DragOrigin>>,
    on_drop: Callback<DragLocation>,
    on_open: Callback<TaskId>,
) -> impl IntoView {
    let status = task.status_label().to_string();
    let priority = task.priority_label().to_string();
    let origin = DragOrigin {
        task_id: task.id.clone(),
        location: location.clone(),
    };
    let drag_id = task.id.to_string();
    let task_id = task.id.clone();
    let is_dragged = {
        let task_id = task.id.clone();
        move || dragging.with(|d| d.as_ref().is_some_and(|o| o.task_id == task_id))
    };

    view! {
        <div
            class="kanban-card"
            class:dragging=is_dragged
            draggable="true"
            on:dragstart=move |ev: DragEvent| {
                if let Some(transfer) = ev.data_transfer() {
                    if let Err(e) = transfer.set_data("text/plain", &drag_id) {
                        web_sys::console::error_1(&format!("Failed to set drag data: {:?}", e).into());
                    }
                    transfer.set_effect_allowed("move");
                }
                dragging.set(Some(origin.clone()));
            }
            on:dragend=move |_| dragging.set(None)
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_drop.run(location.clone());
            }
            on:click=move |_| {
                if dragging.with_untracked(|d| d.is_none()) {
                    on_open.run(task_id.clone());
                }
            }
        >
            <div class="card-header">
                <h4 class="card-title">{task.title.clone()}</h4>
                <span class=format!("status-badge {}", Task::badge_class(&status))>{status.clone()}</span>
            </div>
            <p class="card-description">{task.description_text().to_string()}</p>
            <div class="card-footer">
                <div class="card-meta">
                    <span class="due-date">{task.due_label()}</span>
                    <span class=format!("priority-badge {}", Task::badge_class(&priority))>{priority.clone()}</span>
                </div>
                <div class="card-assignee">
                    <span class="assignee-label">"Assigned to:"</span>
                    <span class="assignee-name">{task.assignee_label().to_string()}</span>
                </div>
                <div class="card-owner">
                    <span class="owner-label">"Owner:"</span>
                    <span class="owner-name">{task.owner_label().to_string()}</span>
                </div>
            </div>
        </div>
    }
}
