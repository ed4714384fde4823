//! Dictionary loading
//!
//! The dictionary comes from a remote JSON endpoint, a local file, or the
//! fallback list embedded at build time. A failed remote fetch is recovered
//! from silently by falling back to the embedded list.

mod embedded;
pub mod loader;

use crate::core::Word;
use log::info;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub use embedded::{FALLBACK, FALLBACK_COUNT};

/// Remote dictionary endpoint
pub const DEFAULT_URL: &str = "https://darkermango.github.io/5-Letter-words/words.json";

/// Errors raised while obtaining a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("could not read dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("dictionary is not a JSON object with a `words` array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary contains no usable 5-letter words")]
    Empty,
}

/// Where to load the dictionary from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Fetch from a URL, falling back to the embedded list on any failure
    Remote(String),
    /// Use the embedded list directly
    Fallback,
    /// Newline-separated word file
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--dictionary` argument
    ///
    /// `remote` (fetch `url`), `fallback`, or anything else as a file path.
    #[must_use]
    pub fn from_arg(arg: &str, url: &str) -> Self {
        match arg {
            "remote" => Self::Remote(url.to_string()),
            "fallback" | "embedded" => Self::Fallback,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Where the loaded words actually came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryOrigin {
    Remote(String),
    Fallback,
    File(PathBuf),
}

impl fmt::Display for DictionaryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Fallback => write!(f, "built-in list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read-only word list for a session
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    origin: DictionaryOrigin,
}

impl Dictionary {
    #[must_use]
    pub const fn new(words: Vec<Word>, origin: DictionaryOrigin) -> Self {
        Self { words, origin }
    }

    /// The embedded fallback list
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(loader::words_from_slice(FALLBACK), DictionaryOrigin::Fallback)
    }

    /// Load from the given source
    ///
    /// # Errors
    ///
    /// Only an explicit file source can fail. Remote failures fall back to
    /// the embedded list.
    pub fn load(source: &DictionarySource) -> Result<Self, DictionaryError> {
        let dictionary = match source {
            DictionarySource::Remote(url) => Self::load_remote_with(url, loader::fetch_remote),
            DictionarySource::Fallback => Self::fallback(),
            DictionarySource::File(path) => {
                let words = loader::load_from_file(path)?;
                if words.is_empty() {
                    return Err(DictionaryError::Empty);
                }
                Self::new(words, DictionaryOrigin::File(path.clone()))
            }
        };

        info!(
            "loaded {} words from {}",
            dictionary.len(),
            dictionary.origin
        );
        Ok(dictionary)
    }

    /// Fetch from `url` with `fetch`, falling back on any failure
    ///
    /// Single attempt, no retry. The fetcher is injectable so the fallback
    /// path can be exercised without a network.
    pub fn load_remote_with<F>(url: &str, fetch: F) -> Self
    where
        F: FnOnce(&str) -> Result<String, DictionaryError>,
    {
        match fetch(url).and_then(|body| loader::parse_remote_payload(&body)) {
            Ok(words) => Self::new(words, DictionaryOrigin::Remote(url.to_string())),
            Err(err) => {
                info!("remote dictionary unavailable ({err}), using fallback word list");
                Self::fallback()
            }
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn origin(&self) -> &DictionaryOrigin {
        &self.origin
    }

    /// Whether `word` is in the list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
