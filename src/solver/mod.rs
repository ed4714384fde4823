//! Candidate filtering and next-guess suggestion
//!
//! The filter and the suggester are pure functions of the dictionary and the
//! guess history.

mod config;
mod engine;
pub mod filter;
mod frequency;
mod known;
pub mod scoring;

pub use config::{DEFAULT_OPENERS, ScoringConfig};
pub use engine::{Suggestion, SuggestionReason, suggest_best_word};
pub use filter::{filter_candidates, is_consistent};
pub use frequency::{LetterFrequencies, LetterFrequency, calculate_frequencies, is_vowel};
pub use known::KnownLetterInfo;
pub use scoring::{ScoreOutcome, ScoringContext, rank_pool, score_word};
