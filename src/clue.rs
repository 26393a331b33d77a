use crate::error::InvalidInput;
use crate::word::Word;
use std::fmt;

/// Per-position feedback for one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Right letter, right spot (`G`).
    Correct,
    /// Letter is in the word but not here (`Y`).
    Present,
    /// Letter is not usable here (`B`).
    Absent,
}

impl Clue {
    /// Decode one clue symbol. Lowercase is accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Clue::Correct),
            'Y' => Some(Clue::Present),
            'B' => Some(Clue::Absent),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Clue::Correct => 'G',
            Clue::Present => 'Y',
            Clue::Absent => 'B',
        }
    }
}

/// Decode a clue string such as `"GYBBG"`, ignoring surrounding whitespace.
/// The first symbol outside `G`/`Y`/`B` is reported as `UnknownClue`.
pub fn parse_clues(text: &str) -> Result<Vec<Clue>, InvalidInput> {
    text.trim()
        .chars()
        .map(|c| Clue::from_char(c).ok_or(InvalidInput::UnknownClue(c)))
        .collect()
}

/// A guessed word together with its feedback, one clue per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    clues: Vec<Clue>,
}

impl Guess {
    pub fn new(word: Word, clues: Vec<Clue>) -> Result<Self, InvalidInput> {
        if clues.len() != word.len() {
            return Err(InvalidInput::LengthMismatch {
                what: "clue",
                expected: word.len(),
                found: clues.len(),
            });
        }
        Ok(Self { word, clues })
    }

    /// Parse the text a user typed for a guess and its clues.
    pub fn parse(guess_text: &str, clue_text: &str) -> Result<Self, InvalidInput> {
        let word = Word::parse(guess_text)?;
        let clues = parse_clues(clue_text)?;
        Self::new(word, clues)
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Letter and clue for every position.
    pub fn positions(&self) -> impl Iterator<Item = (u8, Clue)> + '_ {
        self.word.letters().iter().copied().zip(self.clues.iter().copied())
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.word)?;
        for clue in &self.clues {
            write!(f, "{}", clue.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('G', Some(Clue::Correct) ; "green")]
    #[test_case('y', Some(Clue::Present) ; "lowercase yellow")]
    #[test_case('B', Some(Clue::Absent) ; "black")]
    #[test_case('X', None ; "gray is not a symbol here")]
    #[test_case('Z', None ; "unknown")]
    fn test_from_char(c: char, expected: Option<Clue>) {
        assert_eq!(Clue::from_char(c), expected);
    }

    #[test]
    fn test_parse_clues_mixed() {
        assert_eq!(
            parse_clues(" gYb\n").unwrap(),
            vec![Clue::Correct, Clue::Present, Clue::Absent]
        );
    }

    #[test]
    fn test_parse_clues_reports_first_bad_symbol() {
        assert_eq!(parse_clues("GGZGQ"), Err(InvalidInput::UnknownClue('Z')));
    }

    #[test]
    fn test_guess_parse_checks_alignment() {
        let err = Guess::parse("APPLE", "GGGG").unwrap_err();
        assert_eq!(
            err,
            InvalidInput::LengthMismatch {
                what: "clue",
                expected: 5,
                found: 4
            }
        );
    }

    #[test]
    fn test_guess_display_round_trips_symbols() {
        let guess = Guess::parse("apple", "gybbg").unwrap();
        assert_eq!(guess.to_string(), "APPLE GYBBG");
        assert_eq!(guess.len(), 5);
        let positions: Vec<_> = guess.positions().collect();
        assert_eq!(positions[1], (b'P', Clue::Present));
    }
}
