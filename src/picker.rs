//! Interactive terminal picker
//!
//! Drives a [`TagSelect`] controller with a crossterm event loop and
//! renders it with the chip widgets. The loop owns the terminal for its
//! lifetime: raw mode plus alternate screen on entry, restored on exit.

use crate::controller::{PressOutcome, TagSelect};
use crate::events::{Action, map_key, map_mouse};
use crate::item::Item;
use crate::render::{ChipRow, HintBar, KeyHint};
use crate::theme::Theme;
use crate::{Result, TagSelectError};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Outcome of a picker run
#[derive(Debug, Clone)]
pub struct PickResult {
    /// Items selected when the run ended, in insertion order
    pub selected: Vec<Item>,
    /// Whether the user abandoned the selection
    pub aborted: bool,
}

impl PickResult {
    /// Unwrap the selection, treating an abort as an error
    ///
    /// # Errors
    ///
    /// Returns [`TagSelectError::Interrupted`] when the run was aborted.
    pub fn into_selected(self) -> Result<Vec<Item>> {
        if self.aborted {
            Err(TagSelectError::Interrupted)
        } else {
            Ok(self.selected)
        }
    }
}

/// Terminal picker over a tag select controller
pub struct TagPicker {
    select: TagSelect,
    theme: Theme,
    hints: Vec<KeyHint>,
    cursor: usize,
    should_exit: bool,
    aborted: bool,
}

impl TagPicker {
    /// Create a picker for a controller
    #[must_use]
    pub fn new(select: TagSelect) -> Self {
        Self {
            select,
            theme: Theme::default(),
            hints: HintBar::default_hints(),
            cursor: 0,
            should_exit: false,
            aborted: false,
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set custom key hints
    #[must_use]
    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// The underlying controller
    #[must_use]
    pub const fn select(&self) -> &TagSelect {
        &self.select
    }

    /// Apply one action to the picker state
    ///
    /// Presses are suppressed here when the control is disabled, so the
    /// controller never sees the interaction.
    pub fn apply(&mut self, action: Action) -> PressOutcome {
        let candidates = self.select.config().data.len();

        match action {
            Action::MoveLeft => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::MoveRight => {
                if self.cursor + 1 < candidates {
                    self.cursor += 1;
                }
            }
            Action::MoveStart => {
                self.cursor = 0;
            }
            Action::MoveEnd => {
                self.cursor = candidates.saturating_sub(1);
            }
            Action::Press => {
                if !self.select.config().disabled {
                    return self.select.press_index(self.cursor);
                }
            }
            Action::Confirm => {
                self.should_exit = true;
            }
            Action::Abort => {
                self.should_exit = true;
                self.aborted = true;
            }
            Action::Ignored => {}
        }

        PressOutcome::Ignored
    }

    /// Run the picker until the user confirms or aborts
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup, drawing, or event polling
    /// fails.
    pub fn run(mut self) -> Result<PickResult> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal);
        Self::cleanup_terminal()?;
        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<PickResult> {
        while !self.should_exit {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }

            let action = match event::read()? {
                Event::Key(key) => map_key(key),
                Event::Mouse(mouse) => map_mouse(mouse),
                Event::Resize(_, _) => Action::Ignored,
                _ => Action::Ignored,
            };
            self.apply(action);
        }

        Ok(PickResult {
            selected: self.select.selected_items().cloned().collect(),
            aborted: self.aborted,
        })
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        let chips = self.select.chips();
        let row = ChipRow::new(&chips, &self.theme).with_cursor(self.cursor);
        frame.render_widget(row, chunks[0]);

        frame.render_widget(HintBar::new(&self.hints, &self.theme), chunks[1]);
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}
