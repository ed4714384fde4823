//! Suggestion scoring heuristic
//!
//! A single additive pass per word. Disqualification always wins over any
//! bonus.

use super::config::ScoringConfig;
use super::frequency::{LetterFrequencies, is_vowel};
use super::known::KnownLetterInfo;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

const DISTINCT_LETTERS_BONUS: f64 = 50.0;
const FRESH_SLOT_BONUS: f64 = 30.0;
const NEW_LETTER_WEIGHT: f64 = 1.5;
const KNOWN_LETTER_WEIGHT: f64 = 0.5;
const POSITION_WEIGHT: f64 = 2.0;
const NEW_VOWEL_BONUS: f64 = 15.0;
const VOWEL_BALANCE_BONUS: f64 = 20.0;
const OPENER_BONUS: f64 = 100.0;

/// Outcome of scoring one word
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    /// The word contradicts known letter information
    Disqualified,
    Scored(f64),
}

impl ScoreOutcome {
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Disqualified => None,
            Self::Scored(score) => Some(score),
        }
    }

    #[must_use]
    pub const fn is_disqualified(self) -> bool {
        matches!(self, Self::Disqualified)
    }
}

/// Everything a scoring pass needs besides the word itself
pub struct ScoringContext<'a> {
    pub frequencies: &'a LetterFrequencies,
    pub known: &'a KnownLetterInfo,
    /// Number of remaining candidates (not the size of the scored pool)
    pub candidate_count: usize,
    pub config: &'a ScoringConfig,
}

impl ScoringContext<'_> {
    /// Whether the early-game opener bonus is active for this pass
    #[must_use]
    pub fn opener_bonus_active(&self) -> bool {
        self.candidate_count >= self.config.opener_min_candidates
            && self.known.correct_count() == 0
    }
}

/// Score a single word
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::{
///     KnownLetterInfo, ScoreOutcome, ScoringConfig, ScoringContext, calculate_frequencies,
///     score_word,
/// };
///
/// let words = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
/// let frequencies = calculate_frequencies(&refs);
/// let known = KnownLetterInfo::default();
/// let config = ScoringConfig::default();
/// let ctx = ScoringContext {
///     frequencies: &frequencies,
///     known: &known,
///     candidate_count: refs.len(),
///     config: &config,
/// };
///
/// assert!(matches!(score_word(&words[0], &ctx), ScoreOutcome::Scored(s) if s > 0.0));
/// ```
#[must_use]
pub fn score_word(word: &Word, ctx: &ScoringContext<'_>) -> ScoreOutcome {
    let known = ctx.known;
    if !known.admits(word) {
        return ScoreOutcome::Disqualified;
    }

    let mut score = 0.0;

    if word.has_distinct_letters() {
        score += DISTINCT_LETTERS_BONUS;
    }

    for (i, &ch) in word.chars().iter().enumerate() {
        let letter_known = known.is_present(ch);

        if letter_known && !known.is_wrong_position(ch, i) && known.correct_positions[i] != Some(ch)
        {
            score += FRESH_SLOT_BONUS;
        }

        let weight = if letter_known {
            KNOWN_LETTER_WEIGHT
        } else {
            NEW_LETTER_WEIGHT
        };
        score += weight * ctx.frequencies.frequency(ch) as f64;
        score += POSITION_WEIGHT * ctx.frequencies.position_frequency(ch, i) as f64;

        if is_vowel(ch) && !letter_known {
            score += NEW_VOWEL_BONUS;
        }
    }

    let vowels = word.chars().iter().filter(|&&ch| is_vowel(ch)).count();
    if (2..=3).contains(&vowels) {
        score += VOWEL_BALANCE_BONUS;
    }

    if ctx.opener_bonus_active() && ctx.config.is_opener(word.text()) {
        score += OPENER_BONUS;
    }

    ScoreOutcome::Scored(score)
}

/// Score every word in the pool, dropping disqualified ones
///
/// Result is sorted by descending score; equal scores keep pool order.
#[must_use]
pub fn rank_pool<'a>(pool: &[&'a Word], ctx: &ScoringContext<'_>) -> Vec<(&'a Word, f64)> {
    let mut scored: Vec<(&'a Word, f64)> = pool
        .par_iter()
        .filter_map(|&word| score_word(word, ctx).value().map(|score| (word, score)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    scored
}
