//! One-shot filter command
//!
//! Applies guesses given on the command line as `WORD:PATTERN` and reports
//! what is left.

use crate::core::{LetterState, WORD_LENGTH, Word};
use crate::session::{Session, SessionError, parse_pattern};
use crate::solver::ScoringConfig;

/// Build a session from `WORD:PATTERN` arguments
///
/// A bare `WORD` is added with every letter unknown.
///
/// # Errors
///
/// Returns the first invalid word or pattern, or `TooManyGuesses` past six.
///
/// # Examples
/// ```
/// use wordle_helper::commands::run_filter;
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::ScoringConfig;
///
/// let dictionary: Vec<Word> = ["lathe", "shale", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let session = run_filter(&dictionary, &["CRANE:--Y-G"], ScoringConfig::default()).unwrap();
/// assert_eq!(session.candidates().len(), 1);
/// assert_eq!(session.candidates()[0].text(), "LATHE");
/// ```
pub fn run_filter<'d, S: AsRef<str>>(
    dictionary: &'d [Word],
    specs: &[S],
    config: ScoringConfig,
) -> Result<Session<'d>, SessionError> {
    let mut session = Session::new(dictionary, config);

    for spec in specs {
        let (word, pattern) = match spec.as_ref().split_once(':') {
            Some((word, pattern)) => (word, Some(pattern)),
            None => (spec.as_ref(), None),
        };

        let feedback = match pattern {
            Some(p) => parse_pattern(p)?,
            None => [LetterState::Unknown; WORD_LENGTH],
        };
        session.add_guess_with_feedback(word.trim(), feedback)?;
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn no_specs_keeps_everything() {
        let dictionary = words(&["crane", "lathe"]);
        let specs: [&str; 0] = [];
        let session = run_filter(&dictionary, &specs, ScoringConfig::default()).unwrap();
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn multiple_guesses_narrow_together() {
        let dictionary = words(&["lathe", "paste", "aisle", "shale", "bathe"]);
        let session = run_filter(
            &dictionary,
            &["crane:--Y-G", "bathe:-GGGG"],
            ScoringConfig::default(),
        )
        .unwrap();

        let texts: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["LATHE"]);
    }

    #[test]
    fn bare_word_filters_nothing() {
        let dictionary = words(&["crane", "lathe"]);
        let session = run_filter(&dictionary, &["slate"], ScoringConfig::default()).unwrap();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn emoji_patterns_accepted() {
        let dictionary = words(&["lathe", "shale"]);
        let session =
            run_filter(&dictionary, &["crane:⬜⬜🟨⬜🟩"], ScoringConfig::default()).unwrap();
        assert_eq!(session.candidates().len(), 1);
    }

    #[test]
    fn bad_input_is_reported() {
        let dictionary = words(&["crane"]);

        assert!(matches!(
            run_filter(&dictionary, &["crane:GGG"], ScoringConfig::default()),
            Err(SessionError::InvalidPattern(_))
        ));
        assert!(matches!(
            run_filter(&dictionary, &["cra:GGGGG"], ScoringConfig::default()),
            Err(SessionError::InvalidWord(_))
        ));
    }
}
