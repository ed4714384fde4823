//! Word solving command
//!
//! Plays a game against a known target, feeding the helper the feedback the
//! real game would give and always taking its suggestion.

use crate::core::{Feedback, Word, calculate_feedback};
use crate::session::{MAX_GUESSES, Session, SessionError};
use crate::solver::{ScoringConfig, SuggestionReason};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub score: Option<f64>,
    pub reason: SuggestionReason,
}

/// Solve `target` using suggestions drawn from `dictionary`
///
/// Stops when the target is guessed, when no suggestion is left (the target
/// is not in the dictionary), or after six guesses.
///
/// # Errors
///
/// Returns `SessionError::InvalidWord` if the target is not 5 letters.
///
/// # Examples
/// ```
/// use wordle_helper::commands::solve_word;
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::ScoringConfig;
///
/// let dictionary: Vec<Word> = ["crane", "lathe"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let result = solve_word("lathe", &dictionary, &ScoringConfig::default()).unwrap();
/// assert!(result.success);
/// assert_eq!(result.guesses.len(), 2);
/// ```
pub fn solve_word(
    target: &str,
    dictionary: &[Word],
    config: &ScoringConfig,
) -> Result<SolveResult, SessionError> {
    let target_word = Word::new(target)?;
    let mut session = Session::new(dictionary, config.clone());
    let mut guesses: Vec<GuessStep> = Vec::with_capacity(MAX_GUESSES);

    while !session.is_full() {
        let Some(suggestion) = session.suggestion().cloned() else {
            break;
        };

        let candidates_before = session.candidates().len();
        let feedback = calculate_feedback(&suggestion.word, &target_word);
        session.add_guess_with_feedback(suggestion.word.text(), feedback)?;

        guesses.push(GuessStep {
            word: suggestion.word.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: session.candidates().len(),
            score: suggestion.score,
            reason: suggestion.reason,
        });

        if session.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target_word.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target_word.text().to_string(),
    })
}
