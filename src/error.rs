//! UI Errors
//!
//! Failures of the component model and the DOM calls underneath it.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no window or document is available")]
    NoDocument,
    #[error("document has no body to mount into")]
    NoBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    /// `update()` was called on a component that was never mounted
    #[error("{0} updated before it was mounted")]
    NotMounted(&'static str),
    #[error("todo list is already mounted")]
    AlreadyMounted,
    #[error("invalid widget config: {0}")]
    Config(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => UiError::Dom(message),
            None => UiError::Dom(format!("{:?}", value)),
        }
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
