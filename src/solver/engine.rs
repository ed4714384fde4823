//! Best-word suggester
//!
//! Chooses what to score, scores it, and explains the pick.

use super::config::ScoringConfig;
use super::frequency::calculate_frequencies;
use super::known::KnownLetterInfo;
use super::scoring::{ScoringContext, rank_pool};
use crate::core::{Guess, Word};
use log::debug;
use std::fmt;

/// Why a word was suggested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionReason {
    /// So few candidates remain that the first one is returned as-is
    FewCandidates(usize),
    /// Early-game opener from the configured list
    Opener,
    /// Best probe drawn from the whole dictionary
    Probe { candidates: usize },
    /// Best-scoring remaining candidate
    BestCandidate { candidates: usize },
}

impl fmt::Display for SuggestionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::FewCandidates(1) => write!(f, "Only one word left: this must be it"),
            Self::FewCandidates(n) => {
                write!(f, "Only {n} words left: try the first one")
            }
            Self::Opener => write!(f, "Strong opener covering common letters"),
            Self::Probe { candidates } => write!(
                f,
                "Probe word to split {candidates} candidates with fresh, frequent letters"
            ),
            Self::BestCandidate { candidates } => {
                write!(f, "Highest-scoring of the {candidates} remaining candidates")
            }
        }
    }
}

/// A suggested next guess
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    /// Heuristic score, `None` when scoring was skipped
    pub score: Option<f64>,
    pub reason: SuggestionReason,
}

/// Suggest the best next guess
///
/// - No candidates: `None`
/// - Up to `config.shortcut_max` candidates: the first one, unscored
/// - Otherwise score the dictionary (many candidates) or the candidates
///   (few), capped at `config.max_pool` words, and return the top scorer
///
/// Returns `None` if every scored word is disqualified.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::{ScoringConfig, suggest_best_word};
///
/// let dictionary: Vec<Word> = ["lathe", "paste"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = dictionary.iter().collect();
///
/// let suggestion =
///     suggest_best_word(&candidates, &dictionary, &[], &ScoringConfig::default()).unwrap();
/// assert_eq!(suggestion.word.text(), "LATHE");
/// assert!(suggestion.score.is_none());
/// ```
#[must_use]
pub fn suggest_best_word(
    candidates: &[&Word],
    dictionary: &[Word],
    history: &[Guess],
    config: &ScoringConfig,
) -> Option<Suggestion> {
    let count = candidates.len();

    if count == 0 {
        return None;
    }

    if count <= config.shortcut_max {
        return Some(Suggestion {
            word: candidates[0].clone(),
            score: None,
            reason: SuggestionReason::FewCandidates(count),
        });
    }

    let known = KnownLetterInfo::from_history(history);
    let frequencies = calculate_frequencies(candidates);

    let probing = count > config.probe_threshold;
    let pool: Vec<&Word> = if probing {
        dictionary.iter().take(config.max_pool).collect()
    } else {
        candidates.iter().copied().take(config.max_pool).collect()
    };

    let ctx = ScoringContext {
        frequencies: &frequencies,
        known: &known,
        candidate_count: count,
        config,
    };

    let ranked = rank_pool(&pool, &ctx);
    debug!(
        "scored {} of {} pool words against {count} candidates",
        ranked.len(),
        pool.len()
    );

    let (best, score) = ranked.into_iter().next()?;

    let reason = if ctx.opener_bonus_active() && config.is_opener(best.text()) {
        SuggestionReason::Opener
    } else if probing {
        SuggestionReason::Probe { candidates: count }
    } else {
        SuggestionReason::BestCandidate { candidates: count }
    };

    Some(Suggestion {
        word: best.clone(),
        score: Some(score),
        reason,
    })
}
