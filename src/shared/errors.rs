use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Content parse error: {0}")]
    ContentParse(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Wrap a `JsValue` thrown by a web-sys call
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(context: &str, value: wasm_bindgen::JsValue) -> Self {
        AppError::Dom(format!("{}: {:?}", context, value))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
