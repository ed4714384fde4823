//! Known letter information
//!
//! Folds a guess history into the facts the scorer uses to disqualify words.

use crate::core::{Guess, LetterState, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Everything the history has established about the answer
///
/// Facts only accumulate; a later guess never retracts an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLetterInfo {
    /// Letter locked at each position by a `Correct` mark
    pub correct_positions: [Option<u8>; WORD_LENGTH],
    /// Letters confirmed somewhere in the answer
    pub present_letters: FxHashSet<u8>,
    /// Letters confirmed absent from the answer
    pub absent_letters: FxHashSet<u8>,
    /// Positions a present letter is known not to occupy
    pub wrong_positions: FxHashMap<u8, FxHashSet<usize>>,
}

impl KnownLetterInfo {
    /// Extract known letter information from a guess history
    ///
    /// `Absent` marks follow the same duplicate-letter override as the
    /// filter: if the same guess marks the letter `Correct` or `Present`
    /// elsewhere, no global absence is recorded.
    #[must_use]
    pub fn from_history(history: &[Guess]) -> Self {
        let mut info = Self::default();

        for guess in history {
            for (i, letter) in guess.letters().iter().enumerate() {
                let ch = letter.letter();
                match letter.state {
                    LetterState::Correct => {
                        info.correct_positions[i] = Some(ch);
                        info.present_letters.insert(ch);
                    }
                    LetterState::Present => {
                        info.present_letters.insert(ch);
                        info.wrong_positions.entry(ch).or_default().insert(i);
                    }
                    LetterState::Absent => {
                        if !guess.confirmed_elsewhere(ch, i) {
                            info.absent_letters.insert(ch);
                        }
                    }
                    LetterState::Unknown => {}
                }
            }
        }

        info
    }

    /// Number of positions locked by `Correct` marks
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_positions.iter().flatten().count()
    }

    #[inline]
    #[must_use]
    pub fn is_present(&self, letter: u8) -> bool {
        self.present_letters.contains(&letter)
    }

    /// Whether `letter` is known not to sit at `position`
    #[inline]
    #[must_use]
    pub fn is_wrong_position(&self, letter: u8, position: usize) -> bool {
        self.wrong_positions
            .get(&letter)
            .is_some_and(|positions| positions.contains(&position))
    }

    /// Check a word against every known fact
    ///
    /// False when the word uses an absent letter, omits a present letter,
    /// breaks a locked position, or puts a letter in a known wrong slot.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if word.chars().iter().any(|ch| self.absent_letters.contains(ch)) {
            return false;
        }

        if !self.present_letters.iter().all(|&ch| word.has_letter(ch)) {
            return false;
        }

        let locked_ok = self
            .correct_positions
            .iter()
            .enumerate()
            .all(|(i, locked)| locked.is_none_or(|ch| word.char_at(i) == ch));
        if !locked_ok {
            return false;
        }

        !word
            .chars()
            .iter()
            .enumerate()
            .any(|(i, &ch)| self.is_wrong_position(ch, i))
    }
}
