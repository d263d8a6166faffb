use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while wiring the page. None of these are
/// fatal: callers log them and carry on without the affected feature.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("{0} is not loaded")]
    MissingLibrary(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

impl From<JsValue> for FrontendError {
    fn from(value: JsValue) -> Self {
        FrontendError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
