//! Guard Configuration
//!
//! Which elements are guarded, where their message lives, and what to say
//! when they carry none. Pages can override any field with a JSON block:
//!
//! ```html
//! <script id="confirm-guard-config" type="application/json">
//!   { "defaultMessage": "Are you sure you want to perform this action?" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GuardError;

/// Class marking a destructive trigger
pub const MARKER_CLASS: &str = "confirm-delete";
pub const DEFAULT_SELECTOR: &str = ".confirm-delete";
pub const DEFAULT_MESSAGE_ATTRIBUTE: &str = "data-confirm-message";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "确定要执行此操作吗？";
pub const DEFAULT_EVENT: &str = "click";

/// Id of the optional JSON override element
pub const CONFIG_ELEMENT_ID: &str = "confirm-guard-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuardConfig {
    /// CSS selector for trigger elements
    pub selector: String,
    /// Attribute holding the per-element confirmation message
    pub message_attribute: String,
    /// Message used when the attribute is absent or empty
    pub default_message: String,
    /// Activation event to intercept
    pub event: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            message_attribute: DEFAULT_MESSAGE_ATTRIBUTE.to_string(),
            default_message: DEFAULT_CONFIRM_MESSAGE.to_string(),
            event: DEFAULT_EVENT.to_string(),
        }
    }
}

impl GuardConfig {
    /// Parse a page override. Missing or blank fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, GuardError> {
        let parsed: GuardConfig = serde_json::from_str(raw)?;
        Ok(parsed.normalized())
    }

    /// Config from the text of the override element. No text, blank text,
    /// or invalid JSON all yield the defaults; invalid JSON is logged.
    pub fn from_page_text(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(raw).unwrap_or_else(|err| {
                log::warn!("[GUARD] ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            selector: non_blank(self.selector, defaults.selector),
            message_attribute: non_blank(self.message_attribute, defaults.message_attribute),
            default_message: non_blank(self.default_message, defaults.default_message),
            event: non_blank(self.event, defaults.event),
        }
    }
}

fn non_blank(value: String, fallback: String) -> String {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_marker_contract() {
        let config = GuardConfig::default();
        assert_eq!(config.selector, ".confirm-delete");
        assert_eq!(config.message_attribute, "data-confirm-message");
        assert_eq!(config.default_message, DEFAULT_CONFIRM_MESSAGE);
        assert_eq!(config.event, "click");
        assert!(config.selector.ends_with(MARKER_CLASS));
    }

    #[test]
    fn test_partial_override() {
        let config = GuardConfig::from_json(
            r#"{ "defaultMessage": "Are you sure you want to perform this action?" }"#,
        )
        .unwrap();

        assert_eq!(config.default_message, "Are you sure you want to perform this action?");
        assert_eq!(config.selector, DEFAULT_SELECTOR);
        assert_eq!(config.message_attribute, DEFAULT_MESSAGE_ATTRIBUTE);
    }

    #[test]
    fn test_blank_fields_fall_back() {
        let config = GuardConfig::from_json(r#"{ "selector": "  ", "event": "" }"#).unwrap();
        assert_eq!(config.selector, DEFAULT_SELECTOR);
        assert_eq!(config.event, DEFAULT_EVENT);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = GuardConfig::from_json(r#"{ "validate": true, "selector": "a.confirm-delete" }"#).unwrap();
        assert_eq!(config.selector, "a.confirm-delete");
    }

    #[test]
    fn test_page_text_without_override_is_default() {
        assert_eq!(GuardConfig::from_page_text(None), GuardConfig::default());
        assert_eq!(GuardConfig::from_page_text(Some(" \n ")), GuardConfig::default());
    }

    #[test]
    fn test_page_text_with_invalid_json_is_default() {
        assert_eq!(GuardConfig::from_page_text(Some("{ \"selector\": ")), GuardConfig::default());
    }

    #[test]
    fn test_page_text_override_applies() {
        let config = GuardConfig::from_page_text(Some(r#"{ "messageAttribute": "data-prompt" }"#));
        assert_eq!(config.message_attribute, "data-prompt");
        assert_eq!(config.default_message, DEFAULT_CONFIRM_MESSAGE);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = GuardConfig::from_json("{ selector: ").unwrap_err();
        assert!(matches!(err, GuardError::Config(_)));
    }
}
