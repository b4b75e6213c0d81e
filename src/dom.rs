//! DOM Binding
//!
//! Attaches the guard to server-rendered pages through web-sys.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::config::{GuardConfig, CONFIG_ELEMENT_ID};
use crate::error::{js_reason, GuardError};
use crate::guard::{bind_unbound, guard_activation, Activation, Prompt, Trigger, BOUND_ATTRIBUTE};

/// `window.confirm`. A host that refuses to show dialogs counts as a decline.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowPrompt;

impl Prompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("[GUARD] no window to confirm with, declining");
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|err| {
            log::warn!("[GUARD] confirm failed, declining: {}", js_reason(&err));
            false
        })
    }
}

impl Activation for Event {
    fn suppress(&self) {
        self.prevent_default();
    }
}

impl Trigger for Element {
    fn is_bound(&self) -> bool {
        self.has_attribute(BOUND_ATTRIBUTE)
    }

    fn mark_bound(&self) -> Result<(), GuardError> {
        self.set_attribute(BOUND_ATTRIBUTE, "true")
            .map_err(|err| GuardError::Mark(js_reason(&err)))
    }

    fn clear_bound(&self) {
        if let Err(err) = self.remove_attribute(BOUND_ATTRIBUTE) {
            log::warn!("[GUARD] could not clear bound marker: {}", js_reason(&err));
        }
    }
}

pub fn document() -> Result<Document, GuardError> {
    web_sys::window()
        .ok_or(GuardError::NoWindow)?
        .document()
        .ok_or(GuardError::NoDocument)
}

/// Page override from `#confirm-guard-config`, or the defaults
pub fn load_config(document: &Document) -> GuardConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    GuardConfig::from_page_text(raw.as_deref())
}

/// Bind every unbound trigger in the document. Safe to call again after
/// content is added; already guarded triggers are skipped. Only an invalid
/// selector fails the scan; a trigger that cannot be bound is logged and
/// retried on the next scan.
pub fn scan(document: &Document, config: &GuardConfig) -> Result<usize, GuardError> {
    let nodes = document
        .query_selector_all(&config.selector)
        .map_err(|err| GuardError::Selector {
            selector: config.selector.clone(),
            reason: js_reason(&err),
        })?;

    let triggers = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok());

    let bound = bind_unbound(triggers, |element: &Element| bind_trigger(element, config));
    log::info!("[GUARD] bound {} trigger(s) matching `{}`", bound, config.selector);
    Ok(bound)
}

fn bind_trigger(element: &Element, config: &GuardConfig) -> Result<(), GuardError> {
    let target = element.clone();
    let message_attribute = config.message_attribute.clone();
    let default_message = config.default_message.clone();

    let handler = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        // Read at activation time so later attribute edits are honoured
        let message = target.get_attribute(&message_attribute);
        let decision = guard_activation(&WindowPrompt, &ev, message.as_deref(), &default_message);
        log::debug!("[GUARD] activation resolved: {:?}", decision);
    });

    element
        .add_event_listener_with_callback(&config.event, handler.as_ref().unchecked_ref())
        .map_err(|err| GuardError::Listener {
            event: config.event.clone(),
            reason: js_reason(&err),
        })?;
    handler.forget();
    Ok(())
}

/// Scan once the document content is ready.
pub fn install_on_ready(document: Document, config: GuardConfig) -> Result<(), GuardError> {
    if document.ready_state() != "loading" {
        scan(&document, &config)?;
        return Ok(());
    }

    let doc = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = scan(&doc, &config) {
            log::error!("[GUARD] install failed: {}", err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| GuardError::Listener {
            event: "DOMContentLoaded".to_string(),
            reason: js_reason(&err),
        })?;
    on_ready.forget();
    Ok(())
}

/// Global function returning recent log lines, e.g. `window.__confirmGuardLog()`
pub const LOG_HOOK_NAME: &str = "__confirmGuardLog";

/// Expose the logger's buffered lines on `window` for debugging from devtools.
pub fn expose_log_buffer(name: &str) -> Result<(), GuardError> {
    let window = web_sys::window().ok_or(GuardError::NoWindow)?;
    let hook = Closure::<dyn Fn() -> Array>::new(|| {
        console_logger::recent()
            .into_iter()
            .map(|line| JsValue::from_str(&line))
            .collect::<Array>()
    });
    let target: &JsValue = window.as_ref();
    Reflect::set(target, &JsValue::from_str(name), hook.as_ref())
        .map_err(|err| GuardError::Expose(js_reason(&err)))?;
    hook.forget();
    Ok(())
}
