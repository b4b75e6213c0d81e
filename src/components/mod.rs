//! UI Components
//!
//! Leptos counterparts of the document-level guard.

mod confirm_link;

pub use confirm_link::{use_guard_config, ConfirmLink, GuardScope};
