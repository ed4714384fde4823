//! Word list loading utilities
//!
//! Loads words from files, embedded constants, or the remote JSON endpoint.

use super::DictionaryError;
use crate::core::Word;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Timeout for the single remote fetch attempt
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Load words from a newline-separated file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/fallback.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
/// use wordle_helper::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    slice.iter().filter_map(|s| Word::new(s).ok()).collect()
}

/// Shape of the remote dictionary document
#[derive(Debug, Deserialize)]
struct WordsPayload {
    words: Vec<String>,
}

/// Parse the remote JSON document `{ "words": [...] }`
///
/// Entries that are not 5 ASCII letters are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Json` if the body is not JSON or `words` is not
/// an array of strings, and `DictionaryError::Empty` if no usable word
/// remains.
pub fn parse_remote_payload(body: &str) -> Result<Vec<Word>, DictionaryError> {
    let payload: WordsPayload = serde_json::from_str(body)?;
    let words = words_from_slice(&payload.words);

    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }

    Ok(words)
}

/// Fetch the remote dictionary body with a single GET
///
/// # Errors
///
/// Returns `DictionaryError::Http` for transport failures and non-2xx
/// statuses, and `DictionaryError::Io` if the body cannot be read.
pub fn fetch_remote(url: &str) -> Result<String, DictionaryError> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let response = agent.get(url).call().map_err(Box::new)?;
    Ok(response.into_string()?)
}
