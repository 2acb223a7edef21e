use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("request failed: {0}")]
    Js(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("server rejected the request")]
    Rejected,
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_wasm_bindgen::Error),
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Js(message)
    }

    /// Message from the server when it sent one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
