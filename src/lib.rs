//! tag-select - A multi-select tag chip control for ratatui terminals
//!
//! Renders a collection of labeled chips, tracks which are toggled on,
//! and enforces an optional selection cap with an oldest-first eviction
//! policy. The selection logic is plain state; presentation goes through
//! a renderer trait with a ratatui default, and an optional picker loop
//! makes the control directly usable in a terminal.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            TagPicker (loop)              │
//! │  crossterm events → Action → controller  │
//! └────────────────────┬─────────────────────┘
//!                      │
//!        ┌─────────────┼──────────────┐
//!        ▼             ▼              ▼
//! ┌────────────┐ ┌────────────┐ ┌───────────┐
//! │ TagSelect  │ │ Selection  │ │  ChipRow  │
//! │ (policy)   │ │ State      │ │ (widget)  │
//! └────────────┘ └────────────┘ └───────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tag_select::{Item, TagSelect, TagSelectConfig, PressOutcome};
//!
//! let data = vec![Item::from("rust"), Item::from("tui"), Item::from("cli")];
//! let config = TagSelectConfig::new(data).with_max(2);
//! let mut select = TagSelect::new(config);
//!
//! assert_eq!(select.handle_press(&Item::from("rust")), PressOutcome::Selected);
//! assert_eq!(select.handle_press(&Item::from("tui")), PressOutcome::Selected);
//! // At capacity with eviction on: "rust" (oldest) makes room for "cli"
//! assert_eq!(select.handle_press(&Item::from("cli")), PressOutcome::Selected);
//! assert_eq!(select.total_selected(), 2);
//! ```

use thiserror::Error;

pub mod config;
pub mod controller;
pub mod events;
pub mod item;
pub mod picker;
pub mod render;
pub mod selection;
pub mod theme;

/// Error enum, contains all failure states of the crate
#[derive(Debug, Error)]
pub enum TagSelectError {
    /// Terminal I/O error
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The picker run was abandoned by the user
    #[error("selection was interrupted")]
    Interrupted,
}

/// Result type for picker operations
pub type Result<T> = std::result::Result<T, TagSelectError>;

pub use config::TagSelectConfig;
pub use controller::{PressOutcome, TagSelect};
pub use events::Action;
pub use item::Item;
pub use picker::{PickResult, TagPicker};
pub use render::{ChipRenderer, ChipRow, ChipView, HintBar, KeyHint, ThemedChips};
pub use selection::SelectionState;
pub use theme::Theme;
