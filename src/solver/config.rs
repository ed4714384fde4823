//! Heuristic constants for suggestion scoring
//!
//! The opener list and thresholds have no deeper derivation; they are
//! exposed here so callers can tune them.

/// Canonical opening words that receive the early-game bonus
pub const DEFAULT_OPENERS: &[&str] = &[
    "SLATE", "CRANE", "CRATE", "TRACE", "SLANT", "STARE", "RAISE", "ARISE", "IRATE", "AROSE",
    "ADIEU", "AUDIO", "SOARE", "ROATE", "SALET",
];

/// Tunable parameters for the suggester
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Words that get the opener bonus, uppercase
    pub openers: Vec<String>,
    /// Opener bonus applies only while at least this many candidates remain
    pub opener_min_candidates: usize,
    /// Above this many candidates, score the whole dictionary instead
    pub probe_threshold: usize,
    /// Upper bound on the number of words scored per pass
    pub max_pool: usize,
    /// At or below this many candidates, return the first one unscored
    pub shortcut_max: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            openers: DEFAULT_OPENERS.iter().map(|&w| w.to_string()).collect(),
            opener_min_candidates: 1000,
            probe_threshold: 50,
            max_pool: 5000,
            shortcut_max: 3,
        }
    }
}

impl ScoringConfig {
    /// Replace the opener list
    ///
    /// Entries are trimmed and upper-cased; blanks are dropped.
    #[must_use]
    pub fn with_openers<I, S>(mut self, openers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.openers = openers
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub const fn with_opener_min_candidates(mut self, min: usize) -> Self {
        self.opener_min_candidates = min;
        self
    }

    /// Whether `text` is one of the configured openers
    #[must_use]
    pub fn is_opener(&self, text: &str) -> bool {
        self.openers.iter().any(|w| w == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.opener_min_candidates, 1000);
        assert_eq!(config.probe_threshold, 50);
        assert_eq!(config.max_pool, 5000);
        assert_eq!(config.shortcut_max, 3);
        assert!(config.is_opener("CRANE"));
        assert!(!config.is_opener("crane"));
    }

    #[test]
    fn custom_openers_are_normalized() {
        let config = ScoringConfig::default().with_openers([" tares", "", "LINTS"]);
        assert_eq!(config.openers, vec!["TARES", "LINTS"]);
        assert!(config.is_opener("TARES"));
        assert!(!config.is_opener("CRANE"));
    }
}
