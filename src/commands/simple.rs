//! Simple interactive CLI mode
//!
//! Line-oriented helper without the TUI. Guesses are addressed by their
//! 1-based position in the list.

use crate::core::{GuessId, Word};
use crate::output::formatters::{format_candidate_preview, guess_tiles};
use crate::session::{Session, SessionError, parse_pattern};
use crate::solver::ScoringConfig;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Add(String),
    /// Add a guess and apply its pattern in one step
    AddMarked(String, String),
    Mark(usize, String),
    Toggle(usize, usize),
    Remove(usize),
    List,
    Suggest,
    New,
    Help,
    Quit,
}

/// Parse one input line
///
/// Returns `None` for blank or unrecognised input.
#[must_use]
pub fn parse_command(line: &str) -> Option<SimpleCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let first = parts.first()?.to_ascii_lowercase();

    let command = match (first.as_str(), &parts[1..]) {
        ("add" | "a", [word]) => SimpleCommand::Add((*word).to_string()),
        ("add" | "a", [word, pattern]) => {
            SimpleCommand::AddMarked((*word).to_string(), (*pattern).to_string())
        }
        ("mark" | "m", [n, pattern]) => SimpleCommand::Mark(n.parse().ok()?, (*pattern).to_string()),
        ("toggle" | "t", [n, pos]) => SimpleCommand::Toggle(n.parse().ok()?, pos.parse().ok()?),
        ("remove" | "rm" | "r", [n]) => SimpleCommand::Remove(n.parse().ok()?),
        ("list" | "l" | "ls", []) => SimpleCommand::List,
        ("suggest" | "s", []) => SimpleCommand::Suggest,
        ("new" | "n", []) => SimpleCommand::New,
        ("help" | "h" | "?", []) => SimpleCommand::Help,
        ("quit" | "q" | "exit", []) => SimpleCommand::Quit,
        (_, []) if Word::new(parts[0]).is_ok() => SimpleCommand::Add(parts[0].to_string()),
        (_, [pattern]) if Word::new(parts[0]).is_ok() => {
            SimpleCommand::AddMarked(parts[0].to_string(), (*pattern).to_string())
        }
        _ => return None,
    };

    Some(command)
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(dictionary: &[Word], config: ScoringConfig) -> Result<()> {
    let mut session = Session::new(dictionary, config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_lines(&mut session, stdin.lock(), stdout.lock())
}

/// Drive a session from any line source
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: R,
    mut out: W,
) -> Result<()> {
    print_banner(&mut out, session)?;
    print_status(&mut out, session)?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut out)?;
            continue;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(out, "{} Unrecognised input, type 'help'", "✗".red())?;
            prompt(&mut out)?;
            continue;
        };

        if command == SimpleCommand::Quit {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        match apply(session, &command) {
            Ok(()) => match command {
                SimpleCommand::List => print_history(&mut out, session)?,
                SimpleCommand::Help => print_help(&mut out)?,
                SimpleCommand::New => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    print_status(&mut out, session)?;
                }
                _ => print_status(&mut out, session)?,
            },
            Err(err) => writeln!(out, "{} {err}", "✗".red())?,
        }
        prompt(&mut out)?;
    }

    Ok(())
}

/// Apply a command to the session
///
/// # Errors
///
/// Propagates the session error for invalid words, patterns, or positions.
pub fn apply(session: &mut Session<'_>, command: &SimpleCommand) -> Result<(), SessionError> {
    match command {
        SimpleCommand::Add(word) => {
            session.add_guess(word)?;
        }
        SimpleCommand::AddMarked(word, pattern) => {
            let feedback = parse_pattern(pattern)?;
            session.add_guess_with_feedback(word, feedback)?;
        }
        SimpleCommand::Mark(n, pattern) => {
            let id = position_id(session, *n)?;
            session.mark(id, pattern)?;
        }
        SimpleCommand::Toggle(n, pos) => {
            let id = position_id(session, *n)?;
            let index = pos
                .checked_sub(1)
                .ok_or(SessionError::PositionOutOfRange(*pos))?;
            session
                .toggle_letter(id, index)
                .map_err(|_| SessionError::PositionOutOfRange(*pos))?;
        }
        SimpleCommand::Remove(n) => {
            let id = position_id(session, *n)?;
            session.remove_guess(id)?;
        }
        SimpleCommand::New => session.clear(),
        SimpleCommand::List | SimpleCommand::Suggest | SimpleCommand::Help | SimpleCommand::Quit => {}
    }
    Ok(())
}

fn position_id(session: &Session<'_>, position: usize) -> Result<GuessId, SessionError> {
    session
        .id_at(position)
        .ok_or(SessionError::UnknownGuess(GuessId(position as u64)))
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn print_banner<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Wordle Helper - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Dictionary: {} words", session.dictionary_len())?;
    print_help(out)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nType a guess, optionally followed by its feedback:")?;
    writeln!(out, "  CRANE            add a guess (all letters unknown)")?;
    writeln!(out, "  CRANE --Y-G      add a guess with feedback")?;
    writeln!(out, "\nFeedback letters:")?;
    writeln!(out, "  G/🟩 correct   Y/🟨 wrong position   -/⬜ not in word   ? unknown")?;
    writeln!(out, "\nCommands:")?;
    writeln!(out, "  mark N PATTERN   set feedback for guess N")?;
    writeln!(out, "  toggle N POS     cycle one letter (1-5) of guess N")?;
    writeln!(out, "  remove N         delete guess N")?;
    writeln!(out, "  list | suggest | new | help | quit\n")
}

fn print_history<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    if session.history().is_empty() {
        return writeln!(out, "No guesses yet");
    }
    for (i, guess) in session.history().iter().enumerate() {
        writeln!(out, "  {}. {}", (i + 1).to_string().bright_black(), guess_tiles(guess))?;
    }
    Ok(())
}

fn print_status<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    if !session.history().is_empty() {
        print_history(out, session)?;
    }

    let candidates = session.candidates();
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "{} candidates remaining",
        candidates.len().to_string().bright_cyan().bold()
    )?;

    if candidates.is_empty() {
        writeln!(
            out,
            "\n❌ No candidates remain! Check your feedback, or 'remove' a guess."
        )?;
        return Ok(());
    }

    writeln!(out, "{}", format_candidate_preview(candidates))?;

    if let Some(suggestion) = session.suggestion() {
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            suggestion.word.text().bright_yellow().bold()
        )?;
        writeln!(out, "   {}", suggestion.reason)?;
    }

    if session.is_solved() {
        writeln!(out, "\n{}", "🎉 Solved!".bright_green().bold())?;
    } else if session.is_full() {
        writeln!(out, "\nAll six guesses used. Type 'new' to start over.")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use std::io::Cursor;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            parse_command("add crane"),
            Some(SimpleCommand::Add("crane".to_string()))
        );
        assert_eq!(
            parse_command("CRANE --Y-G"),
            Some(SimpleCommand::AddMarked("CRANE".to_string(), "--Y-G".to_string()))
        );
        assert_eq!(
            parse_command("mark 2 GGYY-"),
            Some(SimpleCommand::Mark(2, "GGYY-".to_string()))
        );
        assert_eq!(parse_command("toggle 1 3"), Some(SimpleCommand::Toggle(1, 3)));
        assert_eq!(parse_command("remove 1"), Some(SimpleCommand::Remove(1)));
        assert_eq!(parse_command("LIST"), Some(SimpleCommand::List));
        assert_eq!(parse_command("q"), Some(SimpleCommand::Quit));
        assert_eq!(parse_command("crane"), Some(SimpleCommand::Add("crane".to_string())));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("toggle one 3"), None);
        assert_eq!(parse_command("remove"), None);
        assert_eq!(parse_command("cr4ne"), None);
        assert_eq!(parse_command("too many words here"), None);
    }

    #[test]
    fn apply_toggle_uses_one_based_positions() {
        let dictionary = words(&["crane"]);
        let mut session = Session::new(&dictionary, ScoringConfig::default());
        apply(&mut session, &SimpleCommand::Add("slate".to_string())).unwrap();
        apply(&mut session, &SimpleCommand::Toggle(1, 5)).unwrap();

        assert_eq!(session.history()[0].letters()[4].state, LetterState::Correct);
        assert_eq!(
            apply(&mut session, &SimpleCommand::Toggle(1, 0)),
            Err(SessionError::PositionOutOfRange(0))
        );
        assert_eq!(
            apply(&mut session, &SimpleCommand::Toggle(1, 6)),
            Err(SessionError::PositionOutOfRange(6))
        );
        assert!(matches!(
            apply(&mut session, &SimpleCommand::Remove(2)),
            Err(SessionError::UnknownGuess(_))
        ));
    }

    #[test]
    fn scripted_session() {
        colored::control::set_override(false);
        let dictionary = words(&["crane", "lathe", "paste", "shale"]);
        let mut session = Session::new(&dictionary, ScoringConfig::default());
        let input = Cursor::new("crane --Y-G\nlist\nbogus input here\nquit\nadd slate\n");
        let mut output = Vec::new();

        run_lines(&mut session, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("2 candidates remaining"));
        assert!(text.contains("LATHE PASTE"));
        assert!(text.contains("Unrecognised input"));
        assert!(text.contains("Thanks for playing"));
        // Input after quit is not processed
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn errors_are_reported_not_fatal() {
        colored::control::set_override(false);
        let dictionary = words(&["crane"]);
        let mut session = Session::new(&dictionary, ScoringConfig::default());
        let input = Cursor::new("crane GGG\nmark 3 GGGGG\ncrane\n");
        let mut output = Vec::new();

        run_lines(&mut session, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("invalid feedback pattern"));
        assert!(text.contains("no guess with id"));
        assert_eq!(session.history().len(), 1);
    }
}
