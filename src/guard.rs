//! Delete Confirmation Guard
//!
//! Host-independent core: resolves the message, asks the user, and cancels
//! the activation when they decline. The DOM layer supplies the prompt, the
//! event, and the trigger elements.

use crate::error::GuardError;

/// Attribute set on a trigger once its handler is registered
pub const BOUND_ATTRIBUTE: &str = "data-confirm-bound";

/// Blocking yes/no question to the user
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

/// An activation whose default behaviour can be cancelled
pub trait Activation {
    fn suppress(&self);
}

/// An element that can carry the bound marker
pub trait Trigger {
    fn is_bound(&self) -> bool;
    fn mark_bound(&self) -> Result<(), GuardError>;
    fn clear_bound(&self);
}

/// Outcome of one activation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Suppressed,
}

/// Attribute value if present and non-empty, otherwise the fallback
pub fn resolve_message<'a>(attribute: Option<&'a str>, fallback: &'a str) -> &'a str {
    attribute.filter(|message| !message.is_empty()).unwrap_or(fallback)
}

/// Ask once; cancel the activation on decline.
pub fn guard_activation<P, A>(
    prompt: &P,
    activation: &A,
    attribute: Option<&str>,
    fallback: &str,
) -> Decision
where
    P: Prompt + ?Sized,
    A: Activation + ?Sized,
{
    let message = resolve_message(attribute, fallback);
    if prompt.confirm(message) {
        Decision::Proceed
    } else {
        activation.suppress();
        Decision::Suppressed
    }
}

/// Bind every trigger not yet bound. Returns how many were bound now.
///
/// Triggers are handled one by one: a failure is logged, the trigger is left
/// unmarked so a rescan retries it, and the remaining triggers still get bound.
pub fn bind_unbound<T, I, F>(triggers: I, mut bind: F) -> usize
where
    T: Trigger,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<(), GuardError>,
{
    let mut bound = 0;
    for trigger in triggers {
        if trigger.is_bound() {
            continue;
        }
        // Marked first so a handler never exists on an unmarked trigger
        if let Err(err) = trigger.mark_bound() {
            log::warn!("[GUARD] skipping trigger: {}", err);
            continue;
        }
        match bind(&trigger) {
            Ok(()) => bound += 1,
            Err(err) => {
                trigger.clear_bound();
                log::warn!("[GUARD] trigger left unguarded: {}", err);
            }
        }
    }
    bound
}
