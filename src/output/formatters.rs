//! Formatting utilities for terminal output

use crate::core::{Guess, LetterState, Word};
use colored::{ColoredString, Colorize};

/// Above this many candidates only a preview is listed
pub const PREVIEW_THRESHOLD: usize = 100;

/// Number of candidates listed in a preview
pub const PREVIEW_LEN: usize = 50;

/// Candidates to list, plus how many were left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePreview<'a> {
    pub shown: Vec<&'a Word>,
    pub hidden: usize,
}

/// Every candidate when there are at most 100, otherwise the first 50
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::output::formatters::candidate_preview;
///
/// let words: Vec<Word> = (0..120).map(|_| Word::new("crane").unwrap()).collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let preview = candidate_preview(&refs);
/// assert_eq!(preview.shown.len(), 50);
/// assert_eq!(preview.hidden, 70);
/// ```
#[must_use]
pub fn candidate_preview<'a>(candidates: &[&'a Word]) -> CandidatePreview<'a> {
    let limit = if candidates.len() > PREVIEW_THRESHOLD {
        PREVIEW_LEN
    } else {
        candidates.len()
    };

    CandidatePreview {
        shown: candidates[..limit].to_vec(),
        hidden: candidates.len() - limit,
    }
}

/// Candidate preview as one line: `LATHE PASTE ... +70 more`
#[must_use]
pub fn format_candidate_preview(candidates: &[&Word]) -> String {
    let preview = candidate_preview(candidates);
    let mut line = preview
        .shown
        .iter()
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(" ");

    if preview.hidden > 0 {
        line.push_str(&format!(" +{} more", preview.hidden));
    }
    line
}

/// One letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, state: LetterState) -> ColoredString {
    let tile = format!(" {letter} ");
    match state {
        LetterState::Correct => tile.black().on_green().bold(),
        LetterState::Present => tile.black().on_yellow().bold(),
        LetterState::Absent => tile.white().on_bright_black(),
        LetterState::Unknown => tile.white().on_black(),
    }
}

/// A guess as a row of coloured tiles
#[must_use]
pub fn guess_tiles(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| letter_tile(l.as_char(), l.state).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessId, parse_feedback};

    fn repeated(n: usize) -> Vec<Word> {
        (0..n).map(|_| Word::new("slate").unwrap()).collect()
    }

    #[test]
    fn preview_shows_everything_up_to_threshold() {
        let words = repeated(100);
        let refs: Vec<&Word> = words.iter().collect();

        let preview = candidate_preview(&refs);
        assert_eq!(preview.shown.len(), 100);
        assert_eq!(preview.hidden, 0);
    }

    #[test]
    fn preview_truncates_above_threshold() {
        let words = repeated(101);
        let refs: Vec<&Word> = words.iter().collect();

        let preview = candidate_preview(&refs);
        assert_eq!(preview.shown.len(), PREVIEW_LEN);
        assert_eq!(preview.hidden, 51);
    }

    #[test]
    fn preview_empty() {
        let preview = candidate_preview(&[]);
        assert!(preview.shown.is_empty());
        assert_eq!(preview.hidden, 0);
        assert_eq!(format_candidate_preview(&[]), "");
    }

    #[test]
    fn preview_line_has_remainder() {
        let words = repeated(150);
        let refs: Vec<&Word> = words.iter().collect();

        let line = format_candidate_preview(&refs);
        assert!(line.starts_with("SLATE SLATE"));
        assert!(line.ends_with(" +100 more"));
        assert_eq!(line.matches("SLATE").count(), 50);
    }

    #[test]
    fn guess_tiles_contain_letters() {
        colored::control::set_override(false);
        let guess = Guess::with_feedback(
            GuessId(0),
            &Word::new("crane").unwrap(),
            parse_feedback("G-Y?-").unwrap(),
        );
        assert_eq!(guess_tiles(&guess), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
