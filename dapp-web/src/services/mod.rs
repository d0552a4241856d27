//! Browser interop services

pub mod client;
pub mod extension;
pub mod storage;

use wasm_bindgen::JsValue;

/// Best-effort human-readable message out of a JavaScript error value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
