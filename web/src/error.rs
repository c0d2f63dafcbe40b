//! Errors raised while binding to the page.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("no window or document available")]
    NoDocument,

    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("element matching `{selector}` is not {expected}")]
    WrongElement { selector: String, expected: &'static str },

    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("invalid page config: {0}")]
    Config(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(js_error(&value))
    }
}

/// Best-effort message out of a thrown JS value.
pub(crate) fn js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{value:?}"),
    }
}
