//! Letter frequency statistics over the current candidates

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

const VOWELS: &[u8] = b"AEIOU";

/// Whether an uppercase ASCII letter is a vowel
#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// Frequency statistics for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFrequency {
    pub letter: u8,
    /// Number of candidates containing the letter at least once
    pub frequency: usize,
    /// Number of candidates with the letter at each position
    pub positions: [usize; WORD_LENGTH],
    pub is_vowel: bool,
}

impl LetterFrequency {
    fn new(letter: u8) -> Self {
        Self {
            letter,
            frequency: 0,
            positions: [0; WORD_LENGTH],
            is_vowel: is_vowel(letter),
        }
    }
}

/// Frequency table for every letter seen in a candidate set
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencies {
    by_letter: FxHashMap<u8, LetterFrequency>,
}

impl LetterFrequencies {
    /// Word-presence frequency of `letter` (0 if never seen)
    #[inline]
    #[must_use]
    pub fn frequency(&self, letter: u8) -> usize {
        self.by_letter.get(&letter).map_or(0, |f| f.frequency)
    }

    /// Number of candidates with `letter` at `position` (0 if never seen)
    #[inline]
    #[must_use]
    pub fn position_frequency(&self, letter: u8, position: usize) -> usize {
        self.by_letter
            .get(&letter)
            .map_or(0, |f| f.positions[position])
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<&LetterFrequency> {
        self.by_letter.get(&letter)
    }

    /// Number of distinct letters seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_letter.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_letter.is_empty()
    }

    /// All entries, most frequent first (ties broken alphabetically)
    #[must_use]
    pub fn ranked(&self) -> Vec<LetterFrequency> {
        let mut entries: Vec<LetterFrequency> = self.by_letter.values().copied().collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.letter.cmp(&b.letter)));
        entries
    }
}

/// Count letter frequencies across the candidates
///
/// Each candidate adds one to the frequency of every distinct letter it
/// contains, and one to the positional count for every occurrence.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::calculate_frequencies;
///
/// let words = [Word::new("speed").unwrap(), Word::new("spent").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
/// let freq = calculate_frequencies(&refs);
///
/// assert_eq!(freq.frequency(b'E'), 2); // once per word, not per occurrence
/// assert_eq!(freq.position_frequency(b'E', 2), 2);
/// assert_eq!(freq.position_frequency(b'E', 3), 1);
/// ```
#[must_use]
pub fn calculate_frequencies(candidates: &[&Word]) -> LetterFrequencies {
    let mut by_letter: FxHashMap<u8, LetterFrequency> = FxHashMap::default();

    for word in candidates {
        let chars = word.chars();
        for (i, &ch) in chars.iter().enumerate() {
            let entry = by_letter
                .entry(ch)
                .or_insert_with(|| LetterFrequency::new(ch));
            entry.positions[i] += 1;
            if !chars[..i].contains(&ch) {
                entry.frequency += 1;
            }
        }
    }

    LetterFrequencies { by_letter }
}
