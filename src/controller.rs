//! Press-handling controller for the tag select control
//!
//! Owns the [`SelectionState`], applies the max-selection policy, and
//! produces the per-candidate views handed to the rendering layer.

use crate::config::TagSelectConfig;
use crate::item::Item;
use crate::render::ChipView;
use crate::selection::SelectionState;
use std::fmt;

/// Callback invoked when a selection is rejected at capacity
pub type MaxErrorCallback = Box<dyn FnMut()>;

/// Callback invoked with the pressed item after any state change
pub type ItemPressCallback = Box<dyn FnMut(&Item)>;

/// What a press did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The item was added to the selection
    Selected,
    /// The item was removed from the selection
    Deselected,
    /// At capacity with eviction off; nothing changed
    Rejected,
    /// The control is disabled; nothing changed
    Ignored,
}

/// The stateful tag select controller
///
/// Seeds its selection from `config.value` at construction, then mutates
/// it exclusively through [`TagSelect::handle_press`].
pub struct TagSelect {
    config: TagSelectConfig,
    state: SelectionState,
    on_max_error: Option<MaxErrorCallback>,
    on_item_press: Option<ItemPressCallback>,
}

impl TagSelect {
    /// Create a controller, seeding the selection from the initial value
    ///
    /// Each initial element selects under its derived key; elements may be
    /// full items or raw keys. Duplicate keys keep the first occurrence.
    #[must_use]
    pub fn new(config: TagSelectConfig) -> Self {
        let mut state = SelectionState::new();
        for item in &config.value {
            let key = item.key_under(&config.key_attr);
            if !state.contains(&key) {
                state.insert(key, item.clone());
            }
        }

        Self {
            config,
            state,
            on_max_error: None,
            on_item_press: None,
        }
    }

    /// Set the callback for rejected selections
    #[must_use]
    pub fn on_max_error(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_max_error = Some(Box::new(callback));
        self
    }

    /// Set the callback for presses that changed the selection
    #[must_use]
    pub fn on_item_press(mut self, callback: impl FnMut(&Item) + 'static) -> Self {
        self.on_item_press = Some(Box::new(callback));
        self
    }

    /// The configuration this controller was built with
    #[must_use]
    pub const fn config(&self) -> &TagSelectConfig {
        &self.config
    }

    /// Number of items currently selected
    #[must_use]
    pub fn total_selected(&self) -> usize {
        self.state.len()
    }

    /// Currently selected items, in insertion order
    pub fn selected_items(&self) -> impl Iterator<Item = &Item> {
        self.state.values()
    }

    /// Whether a candidate is currently selected
    ///
    /// Checks membership under the derived key, with the item's own
    /// textual form as a fallback for raw-key seeds.
    #[must_use]
    pub fn is_selected(&self, item: &Item) -> bool {
        self.state.contains(&item.key_under(&self.config.key_attr))
            || self.state.contains(&item.fallback_text())
    }

    /// Apply a press to an item
    ///
    /// Deselecting is always permitted. Selecting is subject to the max
    /// policy: at capacity the press either evicts the oldest selection
    /// (`on_max_switch_to_next`) or is rejected, signalled through the
    /// `on_max_error` callback. After any state change the `on_item_press`
    /// callback receives the pressed item.
    pub fn handle_press(&mut self, item: &Item) -> PressOutcome {
        if self.config.disabled {
            return PressOutcome::Ignored;
        }

        let key = item.key_under(&self.config.key_attr);

        if self.state.contains(&key) {
            self.state.remove(&key);
            self.notify_press(item);
            return PressOutcome::Deselected;
        }

        let at_capacity = self
            .config
            .max
            .is_some_and(|max| self.state.len() >= max);

        if at_capacity {
            if !self.config.on_max_switch_to_next {
                if let Some(callback) = self.on_max_error.as_mut() {
                    callback();
                }
                return PressOutcome::Rejected;
            }
            if let Some(oldest) = self.state.oldest_key().map(str::to_owned) {
                self.state.remove(&oldest);
            }
        }

        self.state.insert(key, item.clone());
        self.notify_press(item);
        PressOutcome::Selected
    }

    /// Press the candidate at `index` in the configured data
    ///
    /// No-op when the index is out of range.
    pub fn press_index(&mut self, index: usize) -> PressOutcome {
        match self.config.data.get(index) {
            Some(item) => {
                let item = item.clone();
                self.handle_press(&item)
            }
            None => PressOutcome::Ignored,
        }
    }

    /// Build the per-candidate views for rendering
    ///
    /// One [`ChipView`] per configured candidate, in data order, with the
    /// derived label and key and the current selected flag.
    #[must_use]
    pub fn chips(&self) -> Vec<ChipView> {
        self.config
            .data
            .iter()
            .map(|item| ChipView {
                key: item.key_under(&self.config.key_attr),
                label: item.label_under(&self.config.label_attr),
                selected: self.is_selected(item),
                disabled: self.config.disabled,
            })
            .collect()
    }

    fn notify_press(&mut self, item: &Item) {
        if let Some(callback) = self.on_item_press.as_mut() {
            callback(item);
        }
    }
}

impl fmt::Debug for TagSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagSelect")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("on_max_error", &self.on_max_error.is_some())
            .field("on_item_press", &self.on_item_press.is_some())
            .finish()
    }
}
