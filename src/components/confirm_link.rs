//! Confirm Link Component
//!
//! Delete link for Leptos-rendered pages, guarded the same way as the
//! server-rendered `.confirm-delete` links.

use leptos::prelude::*;

use crate::config::{GuardConfig, MARKER_CLASS};
use crate::dom::WindowPrompt;
use crate::guard::guard_activation;

/// Provides the page's `GuardConfig` to every guarded component below it.
///
/// ```ignore
/// let config = dom::load_config(&document);
/// mount_to_body(move || view! { <GuardScope config=config><App /></GuardScope> });
/// ```
#[component]
pub fn GuardScope(config: GuardConfig, children: Children) -> impl IntoView {
    provide_context(config);
    children()
}

/// Config from the nearest `GuardScope`, or the defaults outside one
pub fn use_guard_config() -> GuardConfig {
    use_context::<GuardConfig>().unwrap_or_default()
}

/// Guarded delete link
///
/// Renders `<a class="confirm-delete">` already carrying the bound marker, so
/// a document scan leaves it alone and the prompt is shown once. The message
/// lives in the click handler rather than in an attribute, so the markup is
/// the same whatever `messageAttribute` the page configures.
///
/// # Arguments
/// * `href` - Target of the destructive action (e.g., "/employees/delete/5")
/// * `message` - Prompt text; the scope's default message when absent or empty
/// * `class` - Extra CSS classes next to the marker class
#[component]
pub fn ConfirmLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let default_message = use_guard_config().default_message;

    let class = match class {
        Some(extra) if !extra.is_empty() => format!("{} {}", MARKER_CLASS, extra),
        _ => MARKER_CLASS.to_string(),
    };

    view! {
        <a
            href=href
            class=class
            data-confirm-bound="true"
            on:click=move |ev: web_sys::MouseEvent| {
                let event: &web_sys::Event = ev.as_ref();
                guard_activation(&WindowPrompt, event, message.as_deref(), &default_message);
            }
        >
            {children()}
        </a>
    }
}
