use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::ApiConfig;
use crate::core::models::{
    DueDateUpdateRequest, DueDateUpdateResponse, ErrorBody, Task, TaskFilter, TaskId, TaskListResponse,
};

use super::error::ApiError;

/// REST client for the task endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskService {
    config: ApiConfig,
}

impl TaskService {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
        let query = filter
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, String::from(js_sys::encode_uri_component(&value))))
            .collect::<Vec<_>>()
            .join("&");
        let path = format!("tasks/filtered-tasks?{}", query);

        let response: TaskListResponse = self.post_json(&path, &filter.body()).await?;
        web_sys::console::log_1(&format!("Loaded {} tasks", response.tasks.len()).into());
        Ok(response.tasks)
    }

    /// Sets a task's due date. Repeating the call with the same arguments is
    /// harmless.
    pub async fn update_task_due_date(&self, task_id: &TaskId, due_date: NaiveDate) -> Result<(), ApiError> {
        let body = DueDateUpdateRequest::new(task_id, due_date);
        let response: DueDateUpdateResponse = self.post_json("tasks/update-due-date", &body).await?;
        if response.success {
            web_sys::console::log_1(&format!("Task {} now due {}", task_id, body.duedate).into());
            Ok(())
        } else {
            Err(ApiError::Rejected)
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let window = web_sys::window().ok_or(ApiError::Unavailable("window"))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        let payload = serde_json::to_string(body)?;
        init.set_body(&JsValue::from_str(&payload));

        let request = Request::new_with_str_and_init(&self.config.endpoint(path), &init).map_err(ApiError::from_js)?;
        let headers = request.headers();
        headers
            .set("Content-Type", "application/json")
            .map_err(ApiError::from_js)?;
        if let Some(authorization) = self.config.authorization() {
            headers.set("Authorization", &authorization).map_err(ApiError::from_js)?;
        }

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::from_js)?
            .dyn_into()
            .map_err(ApiError::from_js)?;

        if !response.ok() {
            let message = match read_json(&response).await {
                Ok(value) => serde_wasm_bindgen::from_value::<ErrorBody>(value)
                    .ok()
                    .and_then(|body| body.error),
                Err(_) => None,
            };
            return Err(ApiError::Status {
                status: response.status(),
                message,
            });
        }

        let value = read_json(&response).await?;
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

async fn read_json(response: &Response) -> Result<JsValue, ApiError> {
    let promise = response.json().map_err(ApiError::from_js)?;
    JsFuture::from(promise).await.map_err(ApiError::from_js)
}
