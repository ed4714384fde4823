//! Per-letter feedback state

use std::fmt;

/// Feedback attached to one letter of a guess
///
/// `Unknown` is the state of a freshly entered letter and carries no
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    #[default]
    Unknown,
    /// Letter sits at this exact position
    Correct,
    /// Letter is in the word, but not at this position
    Present,
    /// Letter is not in the word (subject to the duplicate-letter override)
    Absent,
}

impl LetterState {
    /// Next state in the toggle cycle
    ///
    /// `Unknown → Correct → Present → Absent → Unknown`
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unknown => Self::Correct,
            Self::Correct => Self::Present,
            Self::Present => Self::Absent,
            Self::Absent => Self::Unknown,
        }
    }

    /// Whether this state confirms the letter is in the word
    #[inline]
    #[must_use]
    pub const fn confirms_presence(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Parse a single feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'X'/'x'/⬜/⬛ for absent
    /// - '?'/'.' for unknown
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            '?' | '.' => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Short ASCII code used in CLI output
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Unknown => '?',
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Unknown => '⬛',
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Not set yet",
            Self::Correct => "Correct position",
            Self::Present => "Wrong position",
            Self::Absent => "Not in word",
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One letter of a guess together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessLetter {
    letter: u8,
    pub state: LetterState,
}

impl GuessLetter {
    #[must_use]
    pub const fn new(letter: u8, state: LetterState) -> Self {
        Self { letter, state }
    }

    /// The uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// Letter as a `char` for display
    #[inline]
    #[must_use]
    pub const fn as_char(&self) -> char {
        self.letter as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert_eq!(LetterState::default(), LetterState::Unknown);
    }

    #[test]
    fn toggle_cycles_through_all_states() {
        let mut state = LetterState::Unknown;
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.next();
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                LetterState::Correct,
                LetterState::Present,
                LetterState::Absent,
                LetterState::Unknown,
            ]
        );
    }

    #[test]
    fn parse_feedback_chars() {
        assert_eq!(LetterState::from_char('g'), Some(LetterState::Correct));
        assert_eq!(LetterState::from_char('🟨'), Some(LetterState::Present));
        assert_eq!(LetterState::from_char('-'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_char('?'), Some(LetterState::Unknown));
        assert_eq!(LetterState::from_char('z'), None);
    }

    #[test]
    fn code_round_trips_through_parser() {
        for state in [
            LetterState::Unknown,
            LetterState::Correct,
            LetterState::Present,
            LetterState::Absent,
        ] {
            assert_eq!(LetterState::from_char(state.code()), Some(state));
        }
    }

    #[test]
    fn presence_confirmation() {
        assert!(LetterState::Correct.confirms_presence());
        assert!(LetterState::Present.confirms_presence());
        assert!(!LetterState::Absent.confirms_presence());
        assert!(!LetterState::Unknown.confirms_presence());
    }
}
