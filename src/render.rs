//! Chip presentation layer
//!
//! [`ChipView`] is the per-candidate render input produced by the
//! controller. Visual presentation goes through the [`ChipRenderer`]
//! collaborator trait; [`ChipRow`] is the default ratatui widget, laying
//! chips out left to right and wrapping onto new rows like the original
//! flex-wrap container.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render input for a single candidate chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    /// Derived selection key
    pub key: String,
    /// Derived display label
    pub label: String,
    /// Whether the candidate is currently selected
    pub selected: bool,
    /// Whether the control is disabled
    pub disabled: bool,
}

/// Item-rendering collaborator
///
/// Produces the single-line visual content of one chip. Implementations
/// must keep selected and unselected chips visibly distinguishable.
pub trait ChipRenderer {
    /// Build the line for one chip
    fn chip_line(&self, chip: &ChipView, is_cursor: bool) -> Line<'static>;
}

/// Default theme-driven chip renderer
#[derive(Debug, Clone)]
pub struct ThemedChips<'a> {
    theme: &'a Theme,
}

impl<'a> ThemedChips<'a> {
    /// Create a renderer over a theme
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl ChipRenderer for ThemedChips<'_> {
    fn chip_line(&self, chip: &ChipView, is_cursor: bool) -> Line<'static> {
        let marker = if chip.selected { "✓ " } else { "" };
        let text = format!(" {marker}{} ", chip.label);

        let style = if chip.disabled {
            self.theme.disabled_style()
        } else if chip.selected {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        if is_cursor && !chip.disabled {
            Line::from(Span::styled(text, style.patch(self.theme.cursor_style())))
        } else {
            Line::from(Span::styled(text, style))
        }
    }
}

/// Widget that renders a wrapping row of chips
pub struct ChipRow<'a> {
    /// Chips to display, in data order
    chips: &'a [ChipView],
    /// Theme for styling
    theme: &'a Theme,
    /// Index of the chip under the cursor
    cursor: Option<usize>,
    /// Custom renderer; defaults to [`ThemedChips`]
    renderer: Option<&'a dyn ChipRenderer>,
    /// Title for the surrounding block
    title: String,
}

impl<'a> ChipRow<'a> {
    /// Create a chip row widget
    #[must_use]
    pub fn new(chips: &'a [ChipView], theme: &'a Theme) -> Self {
        let selected = chips.iter().filter(|c| c.selected).count();
        let title = format!(" Tags ({selected}/{}) ", chips.len());

        Self {
            chips,
            theme,
            cursor: None,
            renderer: None,
            title,
        }
    }

    /// Highlight the chip at `index`
    #[must_use]
    pub const fn with_cursor(mut self, index: usize) -> Self {
        self.cursor = Some(index);
        self
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Use a custom chip renderer
    #[must_use]
    pub const fn with_renderer(mut self, renderer: &'a dyn ChipRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

impl Widget for ChipRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let themed = ThemedChips::new(self.theme);
        let renderer: &dyn ChipRenderer = match self.renderer {
            Some(custom) => custom,
            None => &themed,
        };

        // Flow chips left to right, wrapping onto the next row
        let mut x = inner.x;
        let mut y = inner.y;
        for (idx, chip) in self.chips.iter().enumerate() {
            let line = renderer.chip_line(chip, self.cursor == Some(idx));
            #[allow(clippy::cast_possible_truncation)]
            let width = (line.width() as u16).min(inner.width);

            if x + width > inner.right() && x > inner.x {
                x = inner.x;
                y += 1;
            }
            if y >= inner.bottom() {
                break;
            }

            buf.set_line(x, y, &line, width);
            x += width + 1;
        }
    }
}

/// One key hint shown under the chips
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g. "Space", "Enter")
    pub key: String,
    /// Action description (e.g. "toggle", "confirm")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Single-line bar of key hints
pub struct HintBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HintBar<'a> {
    /// Create a hint bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Default hints for the picker
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "move"),
            KeyHint::new("Space", "toggle"),
            KeyHint::new("Enter", "confirm"),
            KeyHint::new("ESC", "cancel"),
        ]
    }
}

impl Widget for HintBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(hint.key.clone(), self.theme.hint_style()));
            spans.push(Span::styled(
                format!(" {}", hint.action),
                self.theme.hint_text_style(),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
