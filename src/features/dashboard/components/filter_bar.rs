use leptos::prelude::*;

use crate::features::dashboard::filters::{QuickFilter, TaskMetrics};

#[component]
pub fn MetricsStrip(
    #[prop(into)] metrics: Signal<TaskMetrics>,
    active: RwSignal<QuickFilter>,
) -> impl IntoView {
    view! {
        <div class="metrics-strip">
            {move || {
                metrics
                    .get()
                    .tiles()
                    .into_iter()
                    .map(|(label, value, filter)| {
                        view! {
                            <button
                                class="metric-tile"
                                class:active=move || active.get() == filter
                                on:click=move |_| active.set(filter)
                            >
                                <span class="metric-value">{value}</span>
                                <span class="metric-label">{label}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn FilterBar(search: RwSignal<String>, active: RwSignal<QuickFilter>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                class="search-input"
                type="search"
                placeholder="Search tasks..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="quick-filters">
                {QuickFilter::all()
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || active.get() == filter
                                on:click=move |_| active.set(filter)
                            >
                                {filter.as_str()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
