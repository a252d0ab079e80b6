//! Todo Widget Entry Point

use todo_widget::{dom, logging, WidgetConfig};

fn load_config() -> WidgetConfig {
    let from_page = dom::document().and_then(|doc| WidgetConfig::from_document(&doc));
    match from_page {
        Ok(Some(config)) => config,
        Ok(None) => WidgetConfig::default(),
        Err(e) => {
            logging::error("Config", format!("{}, using defaults", e));
            WidgetConfig::default()
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = todo_widget::mount_when_ready(load_config()) {
        logging::error("Main", e);
    }
}
