//! Word list loading utilities
//!
//! Provides functions to load word lists from text or JSON files, or use the embedded list.

use super::WORDS;
use log::info;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Name that selects the embedded word list in `load`
pub const EMBEDDED: &str = "embedded";

/// Error type for word list files that cannot be loaded
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::Json(err) => write!(f, "Failed to parse JSON word list: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// One entry of a JSON word list; other fields are ignored
#[derive(Debug, Deserialize)]
struct JsonEntry {
    word: String,
}

/// Load a word list by name: `embedded`, a `.json` file, or a text file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or parsed.
pub fn load(source: &str) -> Result<Vec<String>, LoadError> {
    if source == EMBEDDED {
        let words = words_from_slice(WORDS);
        info!("Using embedded word list ({} words)", words.len());
        return Ok(words);
    }

    let path = Path::new(source);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_from_json(path)
    } else {
        load_from_file(path)
    }
}

/// Load words from a text file, one per line
///
/// Lines are trimmed and lowercased; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load words from a JSON array of `{ "word": ... }` objects
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or is not such an array.
pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_json(&content)?;

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a JSON array of `{ "word": ... }` objects, lowercasing each word
///
/// # Errors
///
/// Returns `serde_json::Error` if the text is not such an array.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_json;
///
/// let words = words_from_json(r#"[{"word": "Crane"}, {"word": "SLATE", "freq": 3}]"#).unwrap();
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
pub fn words_from_json(content: &str) -> Result<Vec<String>, serde_json::Error> {
    let entries: Vec<JsonEntry> = serde_json::from_str(content)?;
    Ok(entries
        .into_iter()
        .map(|entry| entry.word.to_lowercase())
        .collect())
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
/// use wordle_filter::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_lowercase()).collect()
}
