//! Construction-time configuration for the tag select control

use crate::item::Item;
use serde::{Deserialize, Serialize};

/// Default record field holding an item's display label
pub const DEFAULT_LABEL_ATTR: &str = "label";

/// Default record field holding an item's selection key
pub const DEFAULT_KEY_ATTR: &str = "id";

/// Options for a [`TagSelect`](crate::TagSelect) instance
///
/// Serde-derived so candidate data and chip sets can be loaded straight
/// from JSON. Callbacks live on the controller, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSelectConfig {
    /// Pre-selected items (or raw keys), used once to seed the selection
    pub value: Vec<Item>,
    /// Record field to read display labels from
    pub label_attr: String,
    /// Record field to read selection keys from
    pub key_attr: String,
    /// Candidate items to render, in display order
    pub data: Vec<Item>,
    /// Cap on concurrent selections; `None` = unbounded
    pub max: Option<usize>,
    /// At capacity, evict the oldest selection instead of rejecting
    pub on_max_switch_to_next: bool,
    /// Suppress all presses
    pub disabled: bool,
}

impl Default for TagSelectConfig {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            label_attr: DEFAULT_LABEL_ATTR.to_string(),
            key_attr: DEFAULT_KEY_ATTR.to_string(),
            data: Vec::new(),
            max: None,
            on_max_switch_to_next: true,
            disabled: false,
        }
    }
}

impl TagSelectConfig {
    /// Create a configuration for the given candidates
    #[must_use]
    pub fn new(data: Vec<Item>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Set the pre-selected items
    #[must_use]
    pub fn with_value(mut self, value: Vec<Item>) -> Self {
        self.value = value;
        self
    }

    /// Set the label field name
    #[must_use]
    pub fn with_label_attr(mut self, attr: impl Into<String>) -> Self {
        self.label_attr = attr.into();
        self
    }

    /// Set the key field name
    #[must_use]
    pub fn with_key_attr(mut self, attr: impl Into<String>) -> Self {
        self.key_attr = attr.into();
        self
    }

    /// Cap the number of concurrent selections
    #[must_use]
    pub const fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Choose the at-capacity policy: evict oldest (`true`) or reject
    #[must_use]
    pub const fn with_switch_to_next(mut self, switch: bool) -> Self {
        self.on_max_switch_to_next = switch;
        self
    }

    /// Disable the control
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
