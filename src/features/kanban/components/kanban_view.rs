use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::models::{Task, TaskId};
use crate::core::services::TaskService;
use crate::features::kanban::board::{DragLocation, DragResult, DropOutcome, KanbanBoard, UpdateResolution};
use crate::notifications::use_toaster;
use crate::pages::task_details_path;

use super::column::KanbanColumn;
use super::task_card::DragOrigin;

const UPDATE_FAILED: &str = "Failed to update task due date";

/// Monthly board over `tasks`. A card dropped in another month is due on
/// that month's last day; `on_task_update` fires once the backend accepts.
#[component]
pub fn KanbanView(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_task_update: Callback<()>,
) -> impl IntoView {
    let service = StoredValue::new(use_context::<TaskService>().expect("TaskService context"));
    let toaster = use_toaster();

    let board = RwSignal::new(KanbanBoard::new(Local::now().date_naive()));
    let dragging = RwSignal::new(None::<DragOrigin>);
    let drag_over = RwSignal::new(None::<String>);

    // Rebuild the buckets whenever the task list changes
    Effect::new(move |_| {
        tasks.with(|tasks| board.update(|b| b.distribute(tasks)));
    });

    let (open_task, set_open_task) = signal(None::<TaskId>);
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(task_id) = open_task.get() {
            navigate(&task_details_path(&task_id), Default::default());
        }
    });
    let on_open = Callback::new(move |task_id: TaskId| set_open_task.set(Some(task_id)));

    let on_drop = Callback::new(move |destination: DragLocation| {
        drag_over.set(None);
        let Some(origin) = dragging.get_untracked() else {
            return;
        };
        dragging.set(None);

        let drag = DragResult {
            task_id: origin.task_id,
            source: origin.location,
            destination: Some(destination),
        };
        let outcome = board.try_update(|b| b.apply_drop(&drag));
        let Some(DropOutcome::Rescheduled(change)) = outcome else {
            return;
        };

        let service = service.get_value();
        spawn_local(async move {
            let result = service.update_task_due_date(&change.task_id, change.due_date).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error updating task due date: {}", e).into());
                toaster.error(e.user_message(UPDATE_FAILED));
            }

            let resolution = board.try_update(|b| b.resolve_update(change.ticket, result.is_ok()));
            match resolution {
                Some(UpdateResolution::Confirmed) => on_task_update.run(()),
                Some(UpdateResolution::RolledBack) => {
                    web_sys::console::log_1(&format!("Moved task {} back to its previous month", change.task_id).into());
                    toaster.info("Task moved back to its previous month");
                }
                _ => {}
            }
        });
    });

    view! {
        <div class="kanban-container" on:dragend=move |_| drag_over.set(None)>
            <Show when=move || board.with(|b| b.is_updating())>
                <div class="updating-overlay">
                    <div class="updating-spinner"></div>
                    <p>"Updating task..."</p>
                </div>
            </Show>
            <div class="kanban-board">
                {move || {
                    board.with(|b| {
                        b.columns()
                            .iter()
                            .cloned()
                            .map(|column| {
                                view! {
                                    <KanbanColumn
                                        column=column
                                        dragging=dragging
                                        drag_over=drag_over
                                        on_drop=on_drop
                                        on_open=on_open
                                    />
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}
