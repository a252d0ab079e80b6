//! Console Logging
//!
//! `[Scope] message` lines on the browser console. Debug lines are only
//! written when the mounted widget was configured with `verbose`.

use std::cell::Cell;
use std::fmt::Display;

thread_local! {
    static VERBOSE: Cell<bool> = const { Cell::new(false) };
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.with(|v| v.set(verbose));
}

pub fn debug(scope: &str, message: impl Display) {
    if VERBOSE.with(Cell::get) {
        web_sys::console::log_1(&format!("[{}] {}", scope, message).into());
    }
}

pub fn error(scope: &str, message: impl Display) {
    web_sys::console::error_1(&format!("[{}] {}", scope, message).into());
}
