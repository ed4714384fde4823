//! TUI rendering with ratatui
//!
//! Guess grid, candidate list and suggestion panels.

use super::app::{App, Focus, MessageStyle};
use crate::core::{Guess, LetterState, WORD_LENGTH};
use crate::output::formatters::candidate_preview;
use crate::session::MAX_GUESSES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE HELPER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 + 2), // Grid
            Constraint::Length(3),                      // Input
            Constraint::Min(4),                         // Suggestion
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_suggestion(f, app, chunks[2]);
}

fn tile_style(state: LetterState) -> Style {
    let (fg, bg) = match state {
        LetterState::Correct => (Color::Black, Color::Green),
        LetterState::Present => (Color::Black, Color::Yellow),
        LetterState::Absent => (Color::White, Color::DarkGray),
        LetterState::Unknown => (Color::White, Color::Black),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn guess_line<'a>(guess: &Guess, row: usize, app: &App) -> Line<'a> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (col, letter) in guess.letters().iter().enumerate() {
        let mut style = tile_style(letter.state);
        if app.focus == Focus::Grid && app.cursor.row == row && app.cursor.col == col {
            style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", letter.as_char()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(" {}", guess.id()),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(row, guess)| guess_line(guess, row, app))
        .collect();

    let empty = Style::default().fg(Color::DarkGray);
    for _ in history.len()..MAX_GUESSES {
        lines.push(Line::from(Span::styled(" ·   ·   ·   ·   · ", empty)));
    }

    let border = if app.focus == Focus::Grid {
        Color::Yellow
    } else {
        Color::White
    };

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses (Space: cycle, Del: remove) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border)),
    );
    f.render_widget(grid, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.focus == Focus::Input {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Enter Guess (5 letters) | Tab: use suggestion ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_suggestion(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.session.suggestion() {
        Some(suggestion) => {
            let mut word_line = vec![
                Span::raw("Suggested: "),
                Span::styled(
                    suggestion.word.text().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(score) = suggestion.score {
                word_line.push(Span::styled(
                    format!("  score {score:.1}"),
                    Style::default().fg(Color::Cyan),
                ));
            }
            vec![Line::from(word_line), Line::from(suggestion.reason.to_string())]
        }
        None => vec![Line::from("No suggestion available")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Suggestion ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let preview = candidate_preview(candidates);

    let title = if preview.hidden > 0 {
        format!(
            " Possible Words ({}) | first {} shown ",
            candidates.len(),
            preview.shown.len()
        )
    } else {
        format!(" Possible Words ({}) ", candidates.len())
    };

    let mut items: Vec<ListItem> = preview
        .shown
        .iter()
        .map(|w| ListItem::new(w.text().to_string()))
        .collect();

    if candidates.is_empty() {
        items.push(
            ListItem::new("No words match your current constraints")
                .style(Style::default().fg(Color::Red)),
        );
    } else if preview.hidden > 0 {
        items.push(
            ListItem::new(format!("+{} more...", preview.hidden))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    let border = if app.focus == Focus::Candidates {
        Color::Yellow
    } else {
        Color::Green
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(border)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if app.focus == Focus::Candidates {
        state.select(Some(app.candidate_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let source = Paragraph::new(format!("Dictionary: {}", app.source))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(source, chunks[0]);

    let candidates_text = format!(
        "Candidates: {}/{}",
        app.session.candidates().len(),
        app.session.dictionary_len()
    );
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[1]);

    let help_text = match app.focus {
        Focus::Input => "Enter: Add | ↑: Grid | ↓: Words | Ctrl-N: New | Esc: Quit",
        Focus::Grid => "←→↑↓: Move | Space: Cycle | Del: Remove | Esc: Quit",
        Focus::Candidates => "↑↓: Select | Enter: Add word | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::Session;
    use crate::solver::ScoringConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_candidates_and_suggestion() {
        let dictionary: Vec<Word> = ["lathe", "paste"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let app = App::new(Session::new(&dictionary, ScoringConfig::default()), "test");

        let text = screen_text(&app);
        assert!(text.contains("Possible Words (2)"));
        assert!(text.contains("PASTE"));
        assert!(text.contains("Suggested: LATHE"));
    }

    #[test]
    fn renders_guess_tiles() {
        let dictionary: Vec<Word> = ["lathe"].iter().map(|w| Word::new(w).unwrap()).collect();
        let mut session = Session::new(&dictionary, ScoringConfig::default());
        session.add_guess("crane").unwrap();
        let app = App::new(session, "test");

        let text = screen_text(&app);
        assert!(text.contains(" C   R   A   N   E "));
    }
}
