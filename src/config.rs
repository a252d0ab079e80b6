//! Widget Configuration
//!
//! Labels, inline styles and seed tasks shared by every component.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::UiError;

/// Id of the optional `<script type="application/json">` config block
pub const CONFIG_SCRIPT_ID: &str = "todo-config";

/// Tasks the list starts with
pub const SEED_TASKS: &[&str] = &["Сделать домашку", "Сделать практику", "Пойти домой"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub heading: String,
    pub input_placeholder: String,
    pub add_label: String,
    pub delete_label: String,
    /// Inline style of a completed row
    pub done_style: String,
    /// Inline style of a delete button waiting for its second click
    pub armed_delete_style: String,
    pub seed_tasks: Vec<String>,
    pub verbose: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            heading: "TODO List".to_string(),
            input_placeholder: "Задание".to_string(),
            add_label: "+".to_string(),
            delete_label: "🗑️".to_string(),
            done_style: "color: gray;".to_string(),
            armed_delete_style: "background: red;".to_string(),
            seed_tasks: SEED_TASKS.iter().map(|s| s.to_string()).collect(),
            verbose: false,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))
    }

    /// `undefined` and `null` give the default config
    pub fn from_js(value: JsValue) -> Result<Self, UiError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Config from the page's `#todo-config` script block, if there is one
    pub fn from_document(document: &web_sys::Document) -> Result<Option<Self>, UiError> {
        let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
            return Ok(None);
        };
        let json = script.text_content().unwrap_or_default();
        if json.trim().is_empty() {
            return Ok(None);
        }
        Self::from_json(&json).map(Some)
    }
}
