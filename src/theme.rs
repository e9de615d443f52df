//! Color theme for the chip widgets

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for chip rendering
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background for selected chips
    pub selection_bg: Color,
    /// Foreground for selected chips
    pub selection_fg: Color,
    /// Color for the cursor highlight
    pub cursor: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/disabled chips
    pub dimmed: Color,
    /// Color for key hints
    pub hint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            hint: Color::Cyan,
        }
    }

    /// Style for selected chips
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected chips
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the chip under the cursor
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for disabled chips
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for key hints
    #[must_use]
    pub fn hint_style(&self) -> Style {
        Style::default()
            .fg(self.hint)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for hint descriptions
    #[must_use]
    pub fn hint_text_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
