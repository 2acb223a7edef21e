use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::{Task, TaskFilter};
use crate::core::services::TaskService;
use crate::notifications::use_toaster;

#[derive(Clone, Copy)]
pub struct TasksHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub is_loading: ReadSignal<bool>,
    pub refetch: Callback<()>,
}

/// Loads tasks on mount and again whenever `filter` changes, since the
/// server does the ordering and the status/text filtering.
pub fn use_tasks(filter: Signal<TaskFilter>) -> TasksHook {
    let service = StoredValue::new(use_context::<TaskService>().expect("TaskService context"));
    let toaster = use_toaster();
    let tasks = RwSignal::new(Vec::<Task>::new());
    let is_loading = RwSignal::new(true);
    // Responses from superseded requests are dropped
    let latest_request = StoredValue::new(0u64);

    let fetch = move |filter: TaskFilter| {
        let request = latest_request.get_value() + 1;
        latest_request.set_value(request);
        is_loading.set(true);

        let service = service.get_value();
        spawn_local(async move {
            let result = service.list_tasks(&filter).await;
            if latest_request.get_value() != request {
                return;
            }
            match result {
                Ok(loaded) => tasks.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching tasks: {}", e).into());
                    toaster.error("Failed to fetch tasks");
                }
            }
            is_loading.set(false);
        });
    };

    Effect::new(move |_| fetch(filter.get()));

    let refetch = Callback::new(move |_| fetch(filter.get_untracked()));

    TasksHook {
        tasks: tasks.read_only(),
        is_loading: is_loading.read_only(),
        refetch,
    }
}
