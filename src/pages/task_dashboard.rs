use chrono::Local;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::core::models::{Task, TaskFilter, TaskId};
use crate::features::dashboard::{
    apply_filters, task_columns, use_tasks, FilterBar, MetricsStrip, QuickFilter, TaskMetrics, TasksHook,
    ViewMode, ViewToggle,
};
use crate::features::data_table::{ColumnSort, EnhancedDataTable, PaginationState, SortState};
use crate::features::kanban::KanbanView;
use crate::pages::task_details_path;

const LIST_PAGE_SIZE: usize = 10;

#[component]
pub fn TaskDashboard() -> impl IntoView {
    let sorting = RwSignal::new(SortState::from(ColumnSort::desc("duedate")));
    let pagination = RwSignal::new(PaginationState::new(LIST_PAGE_SIZE));
    let view_mode = RwSignal::new(ViewMode::default());
    let search = RwSignal::new(String::new());
    let quick_filter = RwSignal::new(QuickFilter::default());

    let query = use_query_map();
    let filter = Memo::new(move |_| {
        TaskFilter::sorted_by(sorting.get())
            .with_status_query(query.with(|q| q.get("status")).as_deref())
            .with_text(&search.get())
    });
    let TasksHook { tasks, is_loading, refetch } = use_tasks(filter.into());

    let visible = Memo::new(move |_| {
        let today = Local::now().date_naive();
        tasks.with(|all| search.with(|query| apply_filters(all, query, quick_filter.get(), today)))
    });
    let metrics = Memo::new(move |_| tasks.with(|all| TaskMetrics::compute(all, Local::now().date_naive())));

    // A narrower result set starts again from the first page
    Effect::new(move |_| {
        search.track();
        quick_filter.track();
        if pagination.with_untracked(|p| p.page_index != 0) {
            pagination.update(|p| p.page_index = 0);
        }
    });

    let (open_task, set_open_task) = signal(None::<TaskId>);
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(task_id) = open_task.get() {
            navigate(&task_details_path(&task_id), Default::default());
        }
    });

    let on_sorting_change = Callback::new(move |next: SortState| sorting.set(next));
    let on_pagination_change = Callback::new(move |next: PaginationState| pagination.set(next));
    let on_row_click = Callback::new(move |task: Task| set_open_task.set(Some(task.id)));

    view! {
        <div class="task-dashboard">
            <header class="dashboard-header">
                <h1>"Tasks"</h1>
                <div class="dashboard-actions">
                    <ViewToggle current=view_mode />
                    <button class="refresh-btn" on:click=move |_| refetch.run(())>
                        "Refresh"
                    </button>
                </div>
            </header>
            <MetricsStrip metrics=metrics active=quick_filter />
            <FilterBar search=search active=quick_filter />
            {move || match view_mode.get() {
                ViewMode::List => {
                    view! {
                        <EnhancedDataTable
                            columns=task_columns()
                            data=visible
                            page_size=LIST_PAGE_SIZE
                            pagination=pagination
                            on_pagination_change=on_pagination_change
                            sorting=sorting
                            on_sorting_change=on_sorting_change
                            manual_sorting=true
                            is_loading=is_loading
                            on_row_click=on_row_click
                        />
                    }
                        .into_any()
                }
                ViewMode::Kanban => {
                    view! { <KanbanView tasks=visible on_task_update=refetch /> }.into_any()
                }
            }}
        </div>
    }
}
