//! Candidate filtering.
//!
//! A candidate survives a guess when every position agrees with its clue:
//!
//! - `Correct`: the candidate has the guessed letter at that position.
//! - `Present`: the candidate has the guessed letter, but not at that position.
//! - `Absent`: the candidate does not contain the guessed letter at all, and
//!   its own letter at that position is not already excluded by earlier guesses.
//!
//! Repeated letters in a guess are judged position by position. There is no
//! letter counting, so `SPEED` marked `GBGBB` rules out every word with an `E`
//! at position 2 as well as every word without one.

use crate::clue::{Clue, Guess};
use crate::debug_log;
use crate::error::{InvalidInput, SolverError};
use crate::exclusions::ExclusionSet;
use crate::word::Word;

/// Which candidate letters the accumulated exclusion set is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExclusionScope {
    /// Only the candidate's letters at positions the current guess marks `Absent`.
    #[default]
    AbsentPositions,
    /// Every letter of the candidate.
    WholeWord,
}

/// Keep the candidates consistent with `guess`, in their original order.
///
/// # Errors
/// Returns `InvalidInput::LengthMismatch` if any candidate's length differs from the guess.
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Guess,
    exclusions: &ExclusionSet,
    scope: ExclusionScope,
) -> Result<Vec<Word>, SolverError> {
    let mut filtered = Vec::new();
    for word in candidates {
        if word.len() != guess.len() {
            return Err(InvalidInput::LengthMismatch {
                what: "guess",
                expected: word.len(),
                found: guess.len(),
            }
            .into());
        }
        if is_consistent(word, guess, exclusions, scope) {
            filtered.push(word.clone());
        }
    }
    debug_log!(
        "filter_candidates({guess}, excluded {exclusions}) kept {} of {}",
        filtered.len(),
        candidates.len()
    );
    Ok(filtered)
}

/// Whether `word` agrees with every clue of `guess`. Lengths must already match.
pub fn is_consistent(
    word: &Word,
    guess: &Guess,
    exclusions: &ExclusionSet,
    scope: ExclusionScope,
) -> bool {
    let letters = word.letters();
    if scope == ExclusionScope::WholeWord && letters.iter().any(|&l| exclusions.contains(l)) {
        return false;
    }
    guess
        .positions()
        .zip(letters)
        .all(|((g, clue), &w)| match clue {
            Clue::Correct => w == g,
            Clue::Present => w != g && word.contains(g),
            Clue::Absent => {
                !word.contains(g)
                    && (scope == ExclusionScope::WholeWord || !exclusions.contains(w))
            }
        })
}
