//! Wordle Helper
//!
//! Narrows a 5-letter dictionary by per-letter Wordle feedback and suggests
//! the next guess with a letter-frequency heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::session::Session;
//! use wordle_helper::solver::ScoringConfig;
//! use wordle_helper::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::fallback();
//! let mut session = Session::new(dictionary.words(), ScoringConfig::default());
//!
//! let id = session.add_guess("crane").unwrap();
//! session.mark(id, "--Y-G").unwrap();
//!
//! assert!(session.candidates().iter().any(|w| w.text() == "LATHE"));
//! println!("Try {:?}", session.suggestion().map(|s| s.word.text()));
//! ```

// Core domain types
pub mod core;

// Filtering and suggestion
pub mod solver;

// Guess history and its derived state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
