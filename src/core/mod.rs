//! Core domain types for the Wordle helper
//!
//! Words, letter feedback and guesses. Everything here is pure and has no
//! knowledge of dictionaries or scoring.

mod feedback;
mod guess;
mod letter;
mod word;

pub use feedback::{
    Feedback, SOLVED, calculate_feedback, feedback_to_code, feedback_to_emoji, parse_feedback,
};
pub use guess::{Guess, GuessHistory, GuessId};
pub use letter::{GuessLetter, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};
