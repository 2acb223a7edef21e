use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::ApiConfig;
use crate::core::services::TaskService;
use crate::notifications::{ToastHost, Toaster};
use crate::pages::{TaskDashboard, TaskDetails};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_environment();
    web_sys::console::log_1(&format!("Task API at {}", config.base_url).into());

    provide_context(TaskService::new(config));
    provide_context(Toaster::new());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=TaskDashboard />
                    <Route path=path!("/task-details") view=TaskDetails />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}
