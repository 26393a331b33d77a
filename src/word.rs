use crate::error::InvalidInput;
use std::fmt;
use std::sync::Arc;

/// A word made of uppercase ASCII letters.
///
/// The length is not fixed; the word list decides it. Clones share the
/// same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

impl Word {
    /// Parse a word, trimming surrounding whitespace and uppercasing it.
    ///
    /// # Errors
    /// Returns `InvalidInput::InvalidWord` if the text is empty or contains
    /// anything other than ASCII letters.
    pub fn parse(text: &str) -> Result<Self, InvalidInput> {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidInput::InvalidWord(text.to_string()));
        }
        Ok(Self {
            text: text.to_ascii_uppercase().into(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letters as uppercase ASCII bytes, in order.
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        &*self.text == *other
    }
}
