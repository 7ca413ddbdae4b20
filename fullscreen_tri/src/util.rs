use wasm_bindgen::{JsCast, JsValue};

/// Extracts a human readable message from a value thrown by a JS API.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }

    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}
