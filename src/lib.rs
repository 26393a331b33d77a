// Library interface for wordfind
// This allows integration tests to access internal modules

pub mod cli;
pub mod clue;
pub mod error;
pub mod exclusions;
pub mod finder;
pub mod game_state;
pub mod loader;
pub mod logging;
pub mod session;
pub mod solver;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use clue::{Clue, Guess, parse_clues};
pub use error::{InvalidInput, SolverError};
pub use exclusions::{ExclusionSet, update_exclusions};
pub use finder::WordFinder;
pub use game_state::{GameInterface, GameOutcome, UserAction, game_loop};
pub use loader::PendingDictionary;
pub use session::{SessionConfig, SolverSession};
pub use solver::{ExclusionScope, filter_candidates};
pub use word::Word;
pub use wordbank::{Dictionary, WordbankSource, load_dictionary, load_dictionary_from_file};
