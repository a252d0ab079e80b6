//! Todo Widget
//!
//! A single-page TODO list rendered straight onto the DOM with a small
//! component model: build elements, render components, replace them
//! wholesale on update.

pub mod component;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

pub use component::Component;
pub use components::TodoList;
pub use config::WidgetConfig;
pub use error::UiError;

thread_local! {
    /// The list mounted on the page body, kept alive for the page's lifetime
    static ROOT: RefCell<Option<Rc<TodoList>>> = const { RefCell::new(None) };
}

/// Mount a new list as the last child of `parent`
pub fn mount_into(parent: &Element, config: WidgetConfig) -> Result<Rc<TodoList>, UiError> {
    logging::set_verbose(config.verbose);
    let list = TodoList::new(Rc::new(config));
    let node = list.mount()?;
    parent.append_child(&node)?;
    logging::debug("Mount", format!("mounted with {} tasks", list.tasks().len()));
    Ok(list)
}

/// Append the list to `document.body`. Only one body list per page.
pub fn mount_to_body(config: WidgetConfig) -> Result<(), UiError> {
    if ROOT.with(|root| root.borrow().is_some()) {
        return Err(UiError::AlreadyMounted);
    }
    let body = dom::document()?.body().ok_or(UiError::NoBody)?;
    let list = mount_into(&body, config)?;
    ROOT.with(|root| *root.borrow_mut() = Some(list));
    Ok(())
}

/// Mount once the document has been parsed: right away if it already has,
/// otherwise on `DOMContentLoaded`.
pub fn mount_when_ready(config: WidgetConfig) -> Result<(), UiError> {
    let document = dom::document()?;
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?
        .as_string()
        .unwrap_or_default();

    if ready_state != "loading" {
        return mount_to_body(config);
    }

    let on_loaded = Closure::once_into_js(move || {
        if let Err(e) = mount_to_body(config) {
            logging::error("Mount", e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref())?;
    Ok(())
}

/// JS entry point: `mountTodoList({ heading: "..." })`
#[wasm_bindgen(js_name = mountTodoList)]
pub fn mount_todo_list(config: JsValue) -> Result<(), JsValue> {
    let config = WidgetConfig::from_js(config)?;
    mount_when_ready(config)?;
    Ok(())
}
