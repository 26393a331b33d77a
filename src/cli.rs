use crate::clue::Guess;
use crate::error::SolverError;
use crate::game_state::{GameInterface, UserAction};
use crate::session::{DEFAULT_MAX_GUESSES, SessionConfig};
use crate::solver::ExclusionScope;
use crate::word::Word;
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;

const MAX_CANDIDATES_DISPLAY: usize = 30;
const CANDIDATE_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Check excluded letters only where the current guess is marked B
    AbsentPositions,
    /// Drop any candidate that contains an excluded letter
    WholeWord,
}

impl From<ScopeArg> for ExclusionScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::AbsentPositions => ExclusionScope::AbsentPositions,
            ScopeArg::WholeWord => ExclusionScope::WholeWord,
        }
    }
}

/// Word finder CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a whitespace-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Guesses allowed per word (0 for unlimited)
    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
    pub max_guesses: usize,

    /// Where letters excluded by earlier guesses are checked
    #[arg(long, value_enum, default_value_t = ScopeArg::AbsentPositions)]
    pub exclusion_scope: ScopeArg,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_guesses: (self.max_guesses > 0).then_some(self.max_guesses),
            exclusion_scope: self.exclusion_scope.into(),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Read one trimmed line. `None` at end of input or on a read error.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            None
        }
    }
}

pub fn parse_action(input: &str) -> Option<UserAction> {
    match input.to_uppercase().as_str() {
        "" => None,
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewGame),
        "UNDO" => Some(UserAction::Undo),
        guess => Some(UserAction::Guess(guess.to_string())),
    }
}

/// Candidates laid out in rows of three.
pub fn format_candidates(candidates: &[Word]) -> String {
    let shown = &candidates[..candidates.len().min(MAX_CANDIDATES_DISPLAY)];
    let mut out = String::new();
    for row in shown.chunks(CANDIDATE_COLUMNS) {
        let line: Vec<&str> = row.iter().map(Word::as_str).collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    if candidates.len() > shown.len() {
        out.push_str(&format!("...and {} more\n", candidates.len() - shown.len()));
    }
    out
}

/// Line-based front-end over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter your guess (or 'undo', 'next' for a new word, 'exit' to quit):");
        match read_line(&mut self.reader) {
            Some(input) => parse_action(&input),
            None => Some(UserAction::Exit),
        }
    }

    fn read_clues(&mut self) -> Option<String> {
        println!("Enter clues (G=correct, Y=present, B=absent, e.g. GYBBG):");
        read_line(&mut self.reader)
    }

    fn display_loading(&mut self) {
        println!("Loading word list...");
    }

    fn display_loaded(&mut self, word_count: usize, word_len: usize) {
        println!("Loaded {word_count} words of {word_len} letters.");
    }

    fn display_candidates(&mut self, candidates: &[Word]) {
        println!("Possible words ({}):", candidates.len());
        print!("{}", format_candidates(candidates));
    }

    fn display_error(&mut self, error: &SolverError) {
        println!("Error: {error}");
    }

    fn display_undo(&mut self, undone: Option<&Guess>, remaining: usize) {
        match undone {
            Some(guess) => println!("Undid {guess}. {remaining} words possible."),
            None => println!("Nothing to undo."),
        }
    }

    fn display_no_candidates_message(&mut self) {
        println!("No words match. Check your clues.");
    }

    fn display_solution_found(&mut self, solution: &Word) {
        println!("Solution found: {solution}");
    }

    fn display_out_of_guesses(&mut self, limit: usize) {
        println!("Out of guesses ({limit} used). Try 'undo' or 'next'.");
    }

    fn display_guesses_remaining(&mut self, remaining: usize) {
        println!("{remaining} guesses left.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        println!("New word started. {word_count} words possible.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["wordfind"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert!(!cli.verbose);
        assert_eq!(cli.session_config(), SessionConfig::default());
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "wordfind",
            "-i",
            "custom.txt",
            "--max-guesses",
            "0",
            "--exclusion-scope",
            "whole-word",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("custom.txt")));
        assert!(cli.verbose);
        let config = cli.session_config();
        assert_eq!(config.max_guesses, None);
        assert_eq!(config.exclusion_scope, ExclusionScope::WholeWord);
    }

    #[test]
    fn test_parse_cli_rejects_unknown_scope() {
        assert!(Cli::try_parse_from(["wordfind", "--exclusion-scope", "everywhere"]).is_err());
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("exit"), Some(UserAction::Exit));
        assert_eq!(parse_action("Next"), Some(UserAction::NewGame));
        assert_eq!(parse_action("UNDO"), Some(UserAction::Undo));
        assert_eq!(parse_action("crane"), Some(UserAction::Guess("CRANE".into())));
        assert_eq!(parse_action(""), None);
    }

    #[test]
    fn test_read_action_trims_and_stops_at_eof() {
        let mut ui = CliInterface::new(Cursor::new("  slate  \n"));
        assert_eq!(ui.read_action(), Some(UserAction::Guess("SLATE".into())));
        assert_eq!(ui.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_clues_passes_text_through() {
        let mut ui = CliInterface::new(Cursor::new("gyBbz\n"));
        assert_eq!(ui.read_clues(), Some("gyBbz".to_string()));
        assert_eq!(ui.read_clues(), None);
    }

    #[test]
    fn test_format_candidates_rows_of_three() {
        let out = format_candidates(&words(&["APPLE", "ANGLE", "AMPLE", "ADEPT"]));
        assert_eq!(out, "APPLE  ANGLE  AMPLE\nADEPT\n");
        assert_eq!(format_candidates(&[]), "");
    }

    #[test]
    fn test_format_candidates_truncates() {
        let many: Vec<Word> = (0..35)
            .map(|i| Word::parse(&"A".repeat(i % 3 + 1)).unwrap())
            .collect();
        let out = format_candidates(&many);
        assert_eq!(out.lines().count(), MAX_CANDIDATES_DISPLAY / CANDIDATE_COLUMNS + 1);
        assert!(out.ends_with("...and 5 more\n"));
    }
}
