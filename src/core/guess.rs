//! Guesses and guess history

use super::feedback::Feedback;
use super::{GuessLetter, LetterState, WORD_LENGTH, Word};
use std::fmt;

/// Identifier used to address a guess for toggling and removal
///
/// Carries no meaning for filtering or scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuessId(pub u64);

impl fmt::Display for GuessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered guess history; filtering does not depend on the order
pub type GuessHistory = Vec<Guess>;

/// A submitted 5-letter guess with per-letter feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    id: GuessId,
    letters: [GuessLetter; WORD_LENGTH],
}

impl Guess {
    /// New guess with every letter `Unknown`
    #[must_use]
    pub fn new(id: GuessId, word: &Word) -> Self {
        Self::with_feedback(id, word, [LetterState::Unknown; WORD_LENGTH])
    }

    /// New guess with the given feedback already applied
    #[must_use]
    pub fn with_feedback(id: GuessId, word: &Word, feedback: Feedback) -> Self {
        let mut letters = [GuessLetter::new(b'A', LetterState::Unknown); WORD_LENGTH];
        for (slot, (&letter, state)) in letters
            .iter_mut()
            .zip(word.chars().iter().zip(feedback))
        {
            *slot = GuessLetter::new(letter, state);
        }
        Self { id, letters }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GuessId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[GuessLetter; WORD_LENGTH] {
        &self.letters
    }

    /// The guessed word as text
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(GuessLetter::as_char).collect()
    }

    /// Current feedback states
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.letters.map(|l| l.state)
    }

    /// True once every letter has been marked
    #[must_use]
    pub fn is_fully_marked(&self) -> bool {
        self.letters.iter().all(|l| l.state != LetterState::Unknown)
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(|l| l.state == LetterState::Correct)
    }

    /// Copy of this guess with the letter at `index` advanced to its next state
    ///
    /// Returns `None` if `index` is out of range.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Option<Self> {
        let mut next = self.clone();
        let letter = next.letters.get_mut(index)?;
        letter.state = letter.state.next();
        Some(next)
    }

    /// Copy of this guess with all five states replaced
    #[must_use]
    pub fn marked(&self, feedback: Feedback) -> Self {
        let mut next = self.clone();
        for (letter, state) in next.letters.iter_mut().zip(feedback) {
            letter.state = state;
        }
        next
    }

    /// Duplicate-letter override lookup
    ///
    /// True when `letter` is marked `Correct` or `Present` at some position
    /// of this guess other than `index`.
    #[must_use]
    pub fn confirmed_elsewhere(&self, letter: u8, index: usize) -> bool {
        self.letters
            .iter()
            .enumerate()
            .any(|(i, l)| i != index && l.letter() == letter && l.state.confirms_presence())
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_feedback;

    fn guess(text: &str, feedback: &str) -> Guess {
        Guess::with_feedback(
            GuessId(1),
            &Word::new(text).unwrap(),
            parse_feedback(feedback).unwrap(),
        )
    }

    #[test]
    fn new_guess_is_all_unknown() {
        let g = Guess::new(GuessId(7), &Word::new("crane").unwrap());
        assert_eq!(g.id(), GuessId(7));
        assert_eq!(g.text(), "CRANE");
        assert!(g.letters().iter().all(|l| l.state == LetterState::Unknown));
        assert!(!g.is_fully_marked());
    }

    #[test]
    fn toggled_leaves_original_untouched() {
        let g = Guess::new(GuessId(1), &Word::new("crane").unwrap());
        let t = g.toggled(2).unwrap();
        assert_eq!(g.letters()[2].state, LetterState::Unknown);
        assert_eq!(t.letters()[2].state, LetterState::Correct);
        assert_eq!(t.letters()[2].letter(), b'A');
        assert!(g.toggled(5).is_none());
    }

    #[test]
    fn marked_replaces_all_states() {
        let g = guess("crane", "?????").marked(parse_feedback("--Y-G").unwrap());
        assert_eq!(g.feedback(), parse_feedback("--Y-G").unwrap());
        assert!(g.is_fully_marked());
        assert!(!g.is_solved());
        assert!(guess("crane", "GGGGG").is_solved());
    }

    #[test]
    fn confirmed_elsewhere_scans_same_guess() {
        let g = guess("sassy", "G-?--");
        // S is correct at 0, so S at 2 and 3 fall under the override
        assert!(g.confirmed_elsewhere(b'S', 2));
        assert!(g.confirmed_elsewhere(b'S', 3));
        // Position 0 itself is not "elsewhere"
        assert!(!g.confirmed_elsewhere(b'S', 0));
        // A is only marked absent
        assert!(!g.confirmed_elsewhere(b'A', 1));
    }

    #[test]
    fn display_shows_letters() {
        assert_eq!(guess("whale", "-----").to_string(), "WHALE");
        assert_eq!(GuessId(3).to_string(), "#3");
    }
}
