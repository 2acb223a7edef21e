use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::core::models::{Task, TaskFilter};
use crate::core::services::TaskService;
use crate::features::data_table::SortState;
use crate::notifications::use_toaster;
use crate::pages::DASHBOARD_PATH;

#[derive(Debug, Clone, PartialEq)]
enum DetailsState {
    Loading,
    Found(Task),
    Missing,
}

#[component]
pub fn TaskDetails() -> impl IntoView {
    let service = StoredValue::new(use_context::<TaskService>().expect("TaskService context"));
    let toaster = use_toaster();
    let query = use_query_map();
    let state = RwSignal::new(DetailsState::Loading);

    Effect::new(move |_| {
        let Some(wanted) = query.with(|q| q.get("id")) else {
            state.set(DetailsState::Missing);
            return;
        };
        state.set(DetailsState::Loading);
        let service = service.get_value();
        spawn_local(async move {
            match service.list_tasks(&TaskFilter::sorted_by(SortState::unsorted())).await {
                Ok(tasks) => {
                    let found = tasks.into_iter().find(|t| t.id.to_string() == wanted);
                    state.set(found.map(DetailsState::Found).unwrap_or(DetailsState::Missing));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading task {}: {}", wanted, e).into());
                    toaster.error(e.user_message("Failed to load task"));
                    state.set(DetailsState::Missing);
                }
            }
        });
    });

    view! {
        <div class="task-details-page">
            <A href=DASHBOARD_PATH attr:class="back-link">"← Back to tasks"</A>
            {move || match state.get() {
                DetailsState::Loading => view! { <p class="loading">"Loading task..."</p> }.into_any(),
                DetailsState::Missing => view! { <p class="not-found">"Task not found"</p> }.into_any(),
                DetailsState::Found(task) => {
                    let status = task.status_label().to_string();
                    let priority = task.priority_label().to_string();
                    view! {
                        <article class="task-details">
                            <h2>{task.title.clone()}</h2>
                            <p class="task-description">{task.description_text().to_string()}</p>
                            <dl>
                                <dt>"Status"</dt>
                                <dd>
                                    <span class=format!("status-badge {}", Task::badge_class(&status))>{status.clone()}</span>
                                </dd>
                                <dt>"Priority"</dt>
                                <dd>
                                    <span class=format!("priority-badge {}", Task::badge_class(&priority))>{priority.clone()}</span>
                                </dd>
                                <dt>"Due date"</dt>
                                <dd>{task.due_label()}</dd>
                                <dt>"Assigned to"</dt>
                                <dd>{task.assignee_label().to_string()}</dd>
                                <dt>"Owner"</dt>
                                <dd>{task.owner_label().to_string()}</dd>
                            </dl>
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
