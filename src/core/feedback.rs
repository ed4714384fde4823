//! Wordle feedback calculation and parsing
//!
//! Feedback is an array of five [`LetterState`]s, one per guess position.

use super::{LetterState, WORD_LENGTH, Word};

/// Feedback for one guess, one state per position
pub type Feedback = [LetterState; WORD_LENGTH];

/// Feedback with every position marked correct
pub const SOLVED: Feedback = [LetterState::Correct; WORD_LENGTH];

/// Calculate the feedback Wordle gives when `guess` is played against `answer`
///
/// This implements Wordle's exact feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: Mark all exact matches and remove them from the available pool
/// 2. Second pass: Mark present-but-misplaced letters from the remaining pool
/// 3. Everything else is absent
///
/// # Examples
/// ```
/// use wordle_helper::core::{LetterState, Word, calculate_feedback};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("slate").unwrap();
/// let feedback = calculate_feedback(&guess, &answer);
///
/// assert_eq!(feedback[2], LetterState::Correct); // A
/// assert_eq!(feedback[4], LetterState::Correct); // E
/// assert_eq!(feedback[0], LetterState::Absent); // C
/// ```
#[must_use]
pub fn calculate_feedback(guess: &Word, answer: &Word) -> Feedback {
    let mut result = [LetterState::Absent; WORD_LENGTH];
    let mut answer_available = answer.char_counts();

    // Index needed to access guess[i], answer[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == answer.char_at(i) {
            result[i] = LetterState::Correct;
            if let Some(count) = answer_available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterState::Absent
            && let Some(count) = answer_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = LetterState::Present;
            *count -= 1;
        }
    }

    result
}

/// Parse feedback from a string like "GY-G?" or "🟩🟨⬜🟩⬛"
///
/// Whitespace is ignored. See [`LetterState::from_char`] for accepted
/// characters.
///
/// # Examples
/// ```
/// use wordle_helper::core::{LetterState, parse_feedback};
///
/// let feedback = parse_feedback("--Y-G").unwrap();
/// assert_eq!(feedback[2], LetterState::Present);
/// assert_eq!(feedback, parse_feedback("⬜⬜🟨⬜🟩").unwrap());
/// assert!(parse_feedback("GGG").is_none());
/// ```
#[must_use]
pub fn parse_feedback(s: &str) -> Option<Feedback> {
    let states: Vec<LetterState> = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(LetterState::from_char)
        .collect::<Option<_>>()?;

    states.try_into().ok()
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.iter().map(|state| state.emoji()).collect()
}

/// Format feedback using the ASCII codes accepted by [`parse_feedback`]
#[must_use]
pub fn feedback_to_code(feedback: &Feedback) -> String {
    feedback.iter().map(|state| state.code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    fn feedback_for(guess: &str, answer: &str) -> Feedback {
        calculate_feedback(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn exact_match_is_solved() {
        assert_eq!(feedback_for("crane", "crane"), SOLVED);
    }

    #[test]
    fn no_common_letters() {
        assert_eq!(feedback_for("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn mixed_feedback() {
        assert_eq!(
            feedback_for("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
        assert_eq!(
            feedback_for("crane", "react"),
            [Present, Present, Correct, Absent, Present]
        );
    }

    #[test]
    fn duplicate_in_guess_single_in_answer() {
        // Only the first E gets credit when the answer has one E
        assert_eq!(
            feedback_for("speed", "abide"),
            [Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn duplicate_green_takes_precedence() {
        // The green E at position 3 consumes the only E
        assert_eq!(
            feedback_for("geese", "those"),
            [Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn parse_rejects_wrong_length_and_bad_chars() {
        assert!(parse_feedback("GGGG").is_none());
        assert!(parse_feedback("GGGGGG").is_none());
        assert!(parse_feedback("GGZGG").is_none());
    }

    #[test]
    fn parse_ignores_whitespace() {
        assert_eq!(parse_feedback("G Y - G ?"), parse_feedback("GY-G?"));
    }

    #[test]
    fn code_and_emoji_formatting() {
        let feedback = [Correct, Present, Absent, LetterState::Unknown, Correct];
        assert_eq!(feedback_to_code(&feedback), "GY-?G");
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟨⬜⬛🟩");
    }
}
