//! TUI application state and logic

use crate::core::{LetterState, WORD_LENGTH};
use crate::output::formatters::candidate_preview;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which panel receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing a new guess
    Input,
    /// Moving over the guess grid to toggle letters
    Grid,
    /// Picking a word from the candidate list
    Candidates,
}

/// Highlighted letter in the guess grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'d> {
    pub session: Session<'d>,
    pub source: String,
    pub focus: Focus,
    pub input_buffer: String,
    pub cursor: GridCursor,
    pub candidate_index: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'d> App<'d> {
    /// `source` describes where the dictionary came from, for the status bar
    #[must_use]
    pub fn new(session: Session<'d>, source: impl Into<String>) -> Self {
        Self {
            session,
            source: source.into(),
            focus: Focus::Input,
            input_buffer: String::new(),
            cursor: GridCursor::default(),
            candidate_index: 0,
            messages: vec![
                Message {
                    text: "Type your guess and press Enter, then mark each letter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "↑ grid (Space cycles a letter) | ↓ candidates | Tab takes the suggestion"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.accept_suggestion(),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key.code),
                Focus::Grid => self.handle_grid_key(key.code),
                Focus::Candidates => self.handle_candidates_key(key.code),
            },
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.input_buffer);
                if word.len() == WORD_LENGTH {
                    self.submit(&word);
                } else {
                    self.input_buffer = word;
                    self.add_message("Guess must be exactly 5 letters!", MessageStyle::Error);
                }
            }
            KeyCode::Up if !self.session.history().is_empty() => {
                self.focus = Focus::Grid;
                self.cursor.row = self.session.history().len() - 1;
            }
            KeyCode::Down if !self.session.candidates().is_empty() => {
                self.focus = Focus::Candidates;
                self.candidate_index = 0;
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, code: KeyCode) {
        let rows = self.session.history().len();
        if rows == 0 {
            self.focus = Focus::Input;
            return;
        }

        match code {
            KeyCode::Left => self.cursor.col = self.cursor.col.saturating_sub(1),
            KeyCode::Right => self.cursor.col = (self.cursor.col + 1).min(WORD_LENGTH - 1),
            KeyCode::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            KeyCode::Down | KeyCode::Enter => {
                if self.cursor.row + 1 < rows {
                    self.cursor.row += 1;
                } else {
                    self.focus = Focus::Input;
                }
            }
            KeyCode::Char(' ') => self.toggle_at_cursor(),
            KeyCode::Delete | KeyCode::Backspace => self.remove_at_cursor(),
            _ => {}
        }
    }

    fn handle_candidates_key(&mut self, code: KeyCode) {
        let shown = candidate_preview(self.session.candidates()).shown.len();
        if shown == 0 {
            self.focus = Focus::Input;
            return;
        }

        match code {
            KeyCode::Up | KeyCode::Left => {
                if self.candidate_index == 0 {
                    self.focus = Focus::Input;
                } else {
                    self.candidate_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Right => {
                self.candidate_index = (self.candidate_index + 1).min(shown - 1);
            }
            KeyCode::Enter => {
                let word = self
                    .session
                    .candidates()
                    .get(self.candidate_index)
                    .map(|w| w.text().to_string());
                if let Some(word) = word {
                    self.submit(&word);
                }
                self.focus = Focus::Input;
            }
            _ => {}
        }
    }

    /// Add a guess and point the grid cursor at it
    pub fn submit(&mut self, word: &str) {
        match self.session.add_guess(word) {
            Ok(_) => {
                self.cursor = GridCursor {
                    row: self.session.history().len() - 1,
                    col: 0,
                };
                self.focus = Focus::Grid;
                self.add_message(
                    &format!("Added {word}. Press Space on each letter to set its colour."),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn accept_suggestion(&mut self) {
        match self.session.suggestion() {
            Some(suggestion) => {
                let word = suggestion.word.text().to_string();
                self.submit(&word);
            }
            None => self.add_message("No suggestion available", MessageStyle::Error),
        }
    }

    fn toggle_at_cursor(&mut self) {
        let Some(id) = self.session.id_at(self.cursor.row + 1) else {
            return;
        };

        match self.session.toggle_letter(id, self.cursor.col) {
            Ok(state) => {
                if self.session.is_solved() {
                    let guesses = self.session.history().len();
                    self.add_message(
                        &format!("🎉 Solved in {guesses}! Ctrl-N for a new game."),
                        MessageStyle::Success,
                    );
                } else if state != LetterState::Unknown && self.session.candidates().is_empty() {
                    self.add_message(
                        "No words match. Check the letter colours.",
                        MessageStyle::Error,
                    );
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn remove_at_cursor(&mut self) {
        let Some(id) = self.session.id_at(self.cursor.row + 1) else {
            return;
        };

        if let Err(err) = self.session.remove_guess(id) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        let rows = self.session.history().len();
        if rows == 0 {
            self.focus = Focus::Input;
            self.cursor = GridCursor::default();
        } else {
            self.cursor.row = self.cursor.row.min(rows - 1);
        }
        self.add_message("Guess removed", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session.clear();
        self.input_buffer.clear();
        self.cursor = GridCursor::default();
        self.candidate_index = 0;
        self.focus = Focus::Input;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
