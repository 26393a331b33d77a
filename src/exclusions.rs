use crate::clue::{Clue, Guess};
use std::fmt;

/// Letters known to be absent from the solution, accumulated across guesses.
///
/// Stored as a bitset over `A`..=`Z`; other bytes are never members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExclusionSet {
    bits: u32,
}

fn bit(letter: u8) -> Option<u32> {
    letter
        .is_ascii_uppercase()
        .then(|| 1u32 << (letter - b'A'))
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the letter was not already excluded.
    pub fn insert(&mut self, letter: u8) -> bool {
        let Some(mask) = bit(letter) else {
            return false;
        };
        let added = self.bits & mask == 0;
        self.bits |= mask;
        added
    }

    pub fn contains(&self, letter: u8) -> bool {
        bit(letter).is_some_and(|mask| self.bits & mask != 0)
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Excluded letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'A'..=b'Z').filter(|&letter| self.contains(letter))
    }

    /// Add every letter the guess marked `Absent`.
    pub fn absorb(&mut self, guess: &Guess) {
        for (letter, clue) in guess.positions() {
            if clue == Clue::Absent {
                self.insert(letter);
            }
        }
    }
}

/// The exclusion set after taking `guess` into account. `exclusions` is left untouched.
pub fn update_exclusions(guess: &Guess, exclusions: &ExclusionSet) -> ExclusionSet {
    let mut updated = *exclusions;
    updated.absorb(guess);
    updated
}

impl FromIterator<u8> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().map(char::from).collect();
        write!(f, "{{{letters}}}")
    }
}
