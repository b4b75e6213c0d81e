//! Guard Errors
//!
//! Failures of the host environment. A declined prompt is a decision, not an error.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid trigger selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: String, reason: String },

    #[error("failed to mark trigger as bound: {0}")]
    Mark(String),

    #[error("failed to expose log buffer: {0}")]
    Expose(String),

    #[error("invalid guard config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Readable text for a thrown JS value
pub(crate) fn js_reason(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
