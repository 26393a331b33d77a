use crate::error::{InvalidInput, SolverError};
use crate::info_log;
use crate::word::Word;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// The full list of candidate words, all of the same length.
///
/// Immutable once loaded; clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Arc<[Word]>,
    word_len: usize,
}

impl Dictionary {
    pub fn new(words: Vec<Word>) -> Result<Self, InvalidInput> {
        let word_len = words.first().ok_or(InvalidInput::EmptyDictionary)?.len();
        if let Some(odd) = words.iter().find(|w| w.len() != word_len) {
            return Err(InvalidInput::MixedWordLengths {
                word: odd.to_string(),
                expected: word_len,
                found: odd.len(),
            });
        }
        Ok(Self {
            words: words.into(),
            word_len,
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Letters per word.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Build a dictionary from whitespace-separated words, keeping their order.
/// Nothing is skipped: any bad token fails the whole load.
pub fn load_dictionary(raw: &str) -> Result<Dictionary, SolverError> {
    let words = raw
        .split_whitespace()
        .map(Word::parse)
        .collect::<Result<Vec<_>, _>>()?;
    let dictionary = Dictionary::new(words)?;
    info_log!(
        "Loaded {} words of {} letters",
        dictionary.len(),
        dictionary.word_len()
    );
    Ok(dictionary)
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, SolverError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_dictionary(&raw)
}

/// Per-user word list that replaces the embedded one when present.
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordfind").join("words.txt"))
}

/// Where a word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordbankSource {
    Embedded,
    File(PathBuf),
    Text(String),
}

impl WordbankSource {
    /// An explicit path wins, then the per-user list, then the embedded one.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return WordbankSource::File(path);
        }
        match default_wordbank_path() {
            Some(path) if path.is_file() => WordbankSource::File(path),
            _ => WordbankSource::Embedded,
        }
    }

    pub fn load(&self) -> Result<Dictionary, SolverError> {
        match self {
            WordbankSource::Embedded => load_dictionary(EMBEDDED_WORDBANK),
            WordbankSource::File(path) => load_dictionary_from_file(path),
            WordbankSource::Text(raw) => load_dictionary(raw),
        }
    }
}

impl fmt::Display for WordbankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordbankSource::Embedded => f.write_str("embedded word list"),
            WordbankSource::File(path) => write!(f, "{}", path.display()),
            WordbankSource::Text(_) => f.write_str("inline text"),
        }
    }
}
