use crate::clue::Guess;
use crate::error::{InvalidInput, SolverError};
use crate::exclusions::ExclusionSet;
use crate::solver::{ExclusionScope, filter_candidates};
use crate::wordbank::Dictionary;
use crate::word::Word;
use crate::{debug_log, info_log};

/// Guesses allowed per word before the answer itself.
pub const DEFAULT_MAX_GUESSES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// `None` means unlimited.
    pub max_guesses: Option<usize>,
    pub exclusion_scope: ExclusionScope,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_guesses: Some(DEFAULT_MAX_GUESSES),
            exclusion_scope: ExclusionScope::default(),
        }
    }
}

/// One solving attempt over a shared dictionary.
///
/// Every submitted guess narrows the candidates left by the previous one, so
/// the candidates are always consistent with the whole history.
#[derive(Debug, Clone)]
pub struct SolverSession {
    dictionary: Dictionary,
    config: SessionConfig,
    exclusions: ExclusionSet,
    history: Vec<Guess>,
    candidates: Vec<Word>,
}

impl SolverSession {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, SessionConfig::default())
    }

    pub fn with_config(dictionary: Dictionary, config: SessionConfig) -> Self {
        let candidates = dictionary.words().to_vec();
        Self {
            dictionary,
            config,
            exclusions: ExclusionSet::new(),
            history: Vec::new(),
            candidates,
        }
    }

    /// Parse and apply a guess, returning the remaining candidates.
    ///
    /// # Errors
    /// `GuessLimitReached` when out of guesses, `InvalidInput` for malformed
    /// text or a guess whose length doesn't match the dictionary. The session
    /// is unchanged on error.
    pub fn submit_guess(&mut self, guess: &str, clues: &str) -> Result<&[Word], SolverError> {
        self.check_limit()?;
        let guess = Guess::parse(guess, clues)?;
        self.submit(guess)
    }

    /// Apply an already parsed guess.
    pub fn submit(&mut self, guess: Guess) -> Result<&[Word], SolverError> {
        self.check_limit()?;
        if guess.len() != self.dictionary.word_len() {
            return Err(InvalidInput::LengthMismatch {
                what: "guess",
                expected: self.dictionary.word_len(),
                found: guess.len(),
            }
            .into());
        }
        self.apply(guess)?;
        Ok(&self.candidates)
    }

    fn check_limit(&self) -> Result<(), SolverError> {
        match self.config.max_guesses {
            Some(limit) if self.history.len() >= limit => {
                Err(SolverError::GuessLimitReached(limit))
            }
            _ => Ok(()),
        }
    }

    fn apply(&mut self, guess: Guess) -> Result<(), SolverError> {
        let candidates = filter_candidates(
            &self.candidates,
            &guess,
            &self.exclusions,
            self.config.exclusion_scope,
        )?;
        self.exclusions.absorb(&guess);
        debug_log!(
            "Guess {} ({guess}): {} -> {} candidates, excluded {}",
            self.history.len() + 1,
            self.candidates.len(),
            candidates.len(),
            self.exclusions
        );
        self.candidates = candidates;
        self.history.push(guess);
        Ok(())
    }

    /// Forget the last guess, rebuilding state from the remaining history.
    pub fn undo(&mut self) -> Result<Option<Guess>, SolverError> {
        let Some(undone) = self.history.pop() else {
            return Ok(None);
        };
        let history = std::mem::take(&mut self.history);
        self.clear();
        for guess in history {
            self.apply(guess)?;
        }
        info_log!("Undid {undone}; {} candidates", self.candidates.len());
        Ok(Some(undone))
    }

    /// Start over with the same dictionary and config.
    pub fn reset(&mut self) {
        self.history.clear();
        self.clear();
        info_log!("Session reset; {} candidates", self.candidates.len());
    }

    fn clear(&mut self) {
        self.exclusions.clear();
        self.candidates = self.dictionary.words().to_vec();
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// `None` if unlimited.
    pub fn guesses_remaining(&self) -> Option<usize> {
        self.config
            .max_guesses
            .map(|limit| limit.saturating_sub(self.history.len()))
    }
}
