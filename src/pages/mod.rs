pub mod task_dashboard;
pub mod task_details;

pub use task_dashboard::TaskDashboard;
pub use task_details::TaskDetails;

use crate::core::models::TaskId;

pub const DASHBOARD_PATH: &str = "/";
pub const TASK_DETAILS_PATH: &str = "/task-details";

pub fn task_details_path(id: &TaskId) -> String {
    let encoded = String::from(js_sys::encode_uri_component(&id.to_string()));
    format!("{}?id={}", TASK_DETAILS_PATH, encoded)
}
