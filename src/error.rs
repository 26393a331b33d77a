use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed input from the caller or the word list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("{what} has {found} letters, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("'{0}' is not a clue symbol (use G, Y or B)")]
    UnknownClue(char),
    #[error("'{0}' is not a word (letters A-Z only)")]
    InvalidWord(String),
    #[error("word list is empty")]
    EmptyDictionary,
    #[error("word list mixes lengths: '{word}' has {found} letters, expected {expected}")]
    MixedWordLengths {
        word: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("word list is still loading")]
    NotReady,
    #[error("word list failed to load: {0}")]
    LoadFailed(String),
    #[error("no guesses remaining (limit is {0})")]
    GuessLimitReached(usize),
    #[error("could not read word list '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SolverError {
    pub fn is_not_ready(&self) -> bool {
        matches!(self, SolverError::NotReady)
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SolverError::InvalidInput(_))
    }
}
