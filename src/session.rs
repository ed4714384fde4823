//! Game session
//!
//! Owns the guess history for one game and keeps the candidate list and the
//! suggestion in step with it. Every edit rebuilds the history and re-runs
//! the filter and the suggester before returning.

use crate::core::{
    Feedback, Guess, GuessHistory, GuessId, LetterState, WORD_LENGTH, Word, WordError,
    parse_feedback,
};
use crate::solver::{ScoringConfig, Suggestion, filter_candidates, suggest_best_word};
use log::debug;
use thiserror::Error;

/// Most guesses a game can hold
pub const MAX_GUESSES: usize = 6;

/// Errors from editing a session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("already have 6 guesses, remove one or start a new game")]
    TooManyGuesses,

    #[error("no guess with id {0}")]
    UnknownGuess(GuessId),

    #[error("position {0} is out of range (1-5)")]
    PositionOutOfRange(usize),

    #[error("invalid feedback pattern '{0}' (use G/Y/-/? or emoji, 5 letters)")]
    InvalidPattern(String),
}

/// One game: the dictionary, the guesses so far, and what they imply
#[derive(Debug, Clone)]
pub struct Session<'d> {
    dictionary: &'d [Word],
    config: ScoringConfig,
    history: GuessHistory,
    next_id: u64,
    candidates: Vec<&'d Word>,
    suggestion: Option<Suggestion>,
}

impl<'d> Session<'d> {
    #[must_use]
    pub fn new(dictionary: &'d [Word], config: ScoringConfig) -> Self {
        let mut session = Self {
            dictionary,
            config,
            history: Vec::new(),
            next_id: 0,
            candidates: Vec::new(),
            suggestion: None,
        };
        session.refresh();
        session
    }

    /// Add a guess with every letter `Unknown`
    ///
    /// # Errors
    ///
    /// `InvalidWord` if `text` is not 5 ASCII letters, `TooManyGuesses` once
    /// [`MAX_GUESSES`] are recorded.
    pub fn add_guess(&mut self, text: &str) -> Result<GuessId, SessionError> {
        self.add_guess_with_feedback(text, [LetterState::Unknown; WORD_LENGTH])
    }

    /// Add a guess with its feedback already known
    ///
    /// # Errors
    ///
    /// Same as [`Session::add_guess`].
    pub fn add_guess_with_feedback(
        &mut self,
        text: &str,
        feedback: Feedback,
    ) -> Result<GuessId, SessionError> {
        if self.is_full() {
            return Err(SessionError::TooManyGuesses);
        }
        let word = Word::new(text)?;

        let id = GuessId(self.next_id);
        self.next_id += 1;

        let mut history = self.history.clone();
        history.push(Guess::with_feedback(id, &word, feedback));
        self.replace_history(history);

        Ok(id)
    }

    /// Advance one letter to its next state and return the new state
    ///
    /// # Errors
    ///
    /// `UnknownGuess` for a stale id, `PositionOutOfRange` for `index >= 5`.
    pub fn toggle_letter(&mut self, id: GuessId, index: usize) -> Result<LetterState, SessionError> {
        let guess = self.guess(id).ok_or(SessionError::UnknownGuess(id))?;
        let toggled = guess
            .toggled(index)
            .ok_or(SessionError::PositionOutOfRange(index))?;
        let state = toggled.letters()[index].state;

        self.replace_guess(toggled);
        Ok(state)
    }

    /// Set all five letter states at once
    ///
    /// # Errors
    ///
    /// `UnknownGuess` for a stale id.
    pub fn set_feedback(&mut self, id: GuessId, feedback: Feedback) -> Result<(), SessionError> {
        let guess = self.guess(id).ok_or(SessionError::UnknownGuess(id))?;
        let marked = guess.marked(feedback);
        self.replace_guess(marked);
        Ok(())
    }

    /// Parse a pattern such as `--Y-G` and apply it to a guess
    ///
    /// # Errors
    ///
    /// `InvalidPattern` if the pattern does not describe 5 states, otherwise
    /// as [`Session::set_feedback`].
    pub fn mark(&mut self, id: GuessId, pattern: &str) -> Result<(), SessionError> {
        let feedback = parse_pattern(pattern)?;
        self.set_feedback(id, feedback)
    }

    /// # Errors
    ///
    /// `UnknownGuess` for a stale id.
    pub fn remove_guess(&mut self, id: GuessId) -> Result<(), SessionError> {
        if self.guess(id).is_none() {
            return Err(SessionError::UnknownGuess(id));
        }
        let history = self
            .history
            .iter()
            .filter(|g| g.id() != id)
            .cloned()
            .collect();
        self.replace_history(history);
        Ok(())
    }

    /// Start a new game with the same dictionary and configuration
    pub fn clear(&mut self) {
        self.replace_history(Vec::new());
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'d Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub const fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[must_use]
    pub fn guess(&self, id: GuessId) -> Option<&Guess> {
        self.history.iter().find(|g| g.id() == id)
    }

    /// Id of the guess at a 1-based position in the history
    #[must_use]
    pub fn id_at(&self, position: usize) -> Option<GuessId> {
        position
            .checked_sub(1)
            .and_then(|i| self.history.get(i))
            .map(Guess::id)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.history.len() >= MAX_GUESSES
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.iter().any(Guess::is_solved)
    }

    fn replace_guess(&mut self, updated: Guess) {
        let history = self
            .history
            .iter()
            .map(|g| {
                if g.id() == updated.id() {
                    updated.clone()
                } else {
                    g.clone()
                }
            })
            .collect();
        self.replace_history(history);
    }

    fn replace_history(&mut self, history: GuessHistory) {
        self.history = history;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.candidates = filter_candidates(self.dictionary, &self.history);
        self.suggestion = suggest_best_word(
            &self.candidates,
            self.dictionary,
            &self.history,
            &self.config,
        );
        debug!(
            "{} guesses, {} candidates, suggestion {:?}",
            self.history.len(),
            self.candidates.len(),
            self.suggestion.as_ref().map(|s| s.word.text())
        );
    }
}

/// Parse a feedback pattern, mapping failure to a session error
///
/// # Errors
///
/// `InvalidPattern` if `pattern` is not five recognised state characters.
pub fn parse_pattern(pattern: &str) -> Result<Feedback, SessionError> {
    parse_feedback(pattern).ok_or_else(|| SessionError::InvalidPattern(pattern.to_string()))
}
