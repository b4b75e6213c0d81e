//! HR Confirm Guard
//!
//! Asks for confirmation before delete links in the HR management pages
//! take effect, and cancels the navigation when the user declines.

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod guard;

pub use config::GuardConfig;
pub use error::GuardError;
pub use guard::{Decision, Prompt};
