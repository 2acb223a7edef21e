use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::TaskId;
use crate::features::kanban::board::{DragLocation, MonthColumn};

use super::task_card::{DragOrigin, TaskCard};

#[component]
pub fn KanbanColumn(
    column: MonthColumn,
    dragging: RwSignal<Option<DragOrigin>>,
    drag_over: RwSignal<Option<String>>,
    on_drop: Callback<DragLocation>,
    on_open: Callback<TaskId>,
) -> impl IntoView {
    let column_id = column.id.clone();
    let task_count = column.tasks.len();
    let is_target = {
        let column_id = column_id.clone();
        move || drag_over.with(|over| over.as_deref() == Some(column_id.as_str()))
    };

    let cards = column
        .tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| {
            let location = DragLocation::new(column.id.clone(), index);
            view! { <TaskCard task=task location=location dragging=dragging on_drop=on_drop on_open=on_open /> }
        })
        .collect_view();

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3 class="column-title">{column.title}</h3>
                <span class="task-count">{task_count}</span>
            </div>
            <div
                class="task-list"
                class:dragging-over=is_target
                on:dragover={
                    let column_id = column_id.clone();
                    move |ev: DragEvent| {
                        ev.prevent_default();
                        if drag_over.with_untracked(|over| over.as_deref() != Some(column_id.as_str())) {
                            drag_over.set(Some(column_id.clone()));
                        }
                    }
                }
                on:drop={
                    let column_id = column_id.clone();
                    move |ev: DragEvent| {
                        ev.prevent_default();
                        on_drop.run(DragLocation::new(column_id.clone(), task_count));
                    }
                }
            >
                {cards}
                {(task_count == 0).then(|| view! { <div class="empty-column">"No tasks for this month"</div> })}
            </div>
        </div>
    }
}
