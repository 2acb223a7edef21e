use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Kanban,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Kanban => "Kanban",
        }
    }
}

#[component]
pub fn ViewToggle(current: RwSignal<ViewMode>) -> impl IntoView {
    [ViewMode::List, ViewMode::Kanban]
        .into_iter()
        .map(|mode| {
            view! {
                <button
                    class="view-toggle-btn"
                    class:active=move || current.get() == mode
                    on:click=move |_| current.set(mode)
                >
                    {mode.as_str()}
                </button>
            }
        })
        .collect_view()
}
