//! Console output, prefixed so folio's messages are easy to filter.

pub fn log(message: &str) {
    web_sys::console::log_1(&format!("folio: {message}").into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("folio: {message}").into());
}

pub fn error(message: &str) {
    web_sys::console::error_1(&format!("folio: {message}").into());
}
