use crate::clue::Guess;
use crate::error::SolverError;
use crate::finder::WordFinder;
use crate::session::SolverSession;
use crate::word::Word;
use crate::{debug_log, info_log};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Undo,
    NewGame,
    Exit,
}

/// How a game loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Solved(Word),
    Exited,
    LoadFailed,
}

/// The front-end a game loop talks to.
pub trait GameInterface {
    /// `None` means the input was blank or unusable; ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    /// Raw clue text for the last guess. `None` on end of input.
    fn read_clues(&mut self) -> Option<String>;
    fn display_loading(&mut self);
    fn display_loaded(&mut self, word_count: usize, word_len: usize);
    fn display_candidates(&mut self, candidates: &[Word]);
    fn display_error(&mut self, error: &SolverError);
    fn display_undo(&mut self, undone: Option<&Guess>, remaining: usize);
    fn display_no_candidates_message(&mut self);
    fn display_solution_found(&mut self, solution: &Word);
    fn display_out_of_guesses(&mut self, limit: usize);
    fn display_guesses_remaining(&mut self, remaining: usize);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
}

enum GameState {
    Continue,
    Solved(Word),
    NoSolution,
}

fn check_game_state(candidates: &[Word]) -> GameState {
    match candidates {
        [] => GameState::NoSolution,
        [only] => GameState::Solved(only.clone()),
        _ => GameState::Continue,
    }
}

/// Announce the dictionary once it becomes available. `Err` if the load failed.
fn announce_if_ready<I: GameInterface>(
    finder: &mut WordFinder,
    interface: &mut I,
    announced: &mut bool,
) -> Result<(), SolverError> {
    if *announced || !finder.poll()? {
        return Ok(());
    }
    if let Some(session) = finder.session() {
        let dictionary = session.dictionary();
        interface.display_loaded(dictionary.len(), dictionary.word_len());
        *announced = true;
    }
    Ok(())
}

/// The configured limit, if the current word has used it up.
fn exhausted_limit(finder: &WordFinder) -> Option<usize> {
    let session = finder.session()?;
    match session.guesses_remaining() {
        Some(0) => session.config().max_guesses,
        _ => None,
    }
}

pub fn game_loop<I: GameInterface>(finder: &mut WordFinder, interface: &mut I) -> GameOutcome {
    let mut announced = false;
    match finder.poll() {
        Ok(false) => interface.display_loading(),
        Ok(true) => {}
        Err(err) => {
            interface.display_error(&err);
            return GameOutcome::LoadFailed;
        }
    }

    loop {
        if let Err(err) = announce_if_ready(finder, interface, &mut announced) {
            interface.display_error(&err);
            return GameOutcome::LoadFailed;
        }

        let guess = match interface.read_action() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                return GameOutcome::Exited;
            }
            Some(UserAction::NewGame) => {
                match finder.reset() {
                    Ok(()) => {
                        let count = finder.session().map_or(0, |s| s.candidates().len());
                        interface.display_new_game_message(count);
                    }
                    Err(err) => interface.display_error(&err),
                }
                continue;
            }
            Some(UserAction::Undo) => {
                match finder.undo() {
                    Ok(undone) => {
                        let remaining = finder.session().map_or(0, |s| s.candidates().len());
                        interface.display_undo(undone.as_ref(), remaining);
                    }
                    Err(err) => interface.display_error(&err),
                }
                continue;
            }
            Some(UserAction::Guess(g)) => g,
            None => continue,
        };

        if let Some(limit) = exhausted_limit(finder) {
            interface.display_out_of_guesses(limit);
            continue;
        }

        let Some(clues) = interface.read_clues() else {
            interface.display_exit_message();
            return GameOutcome::Exited;
        };
        debug_log!("game_loop() - guess '{}' clues '{}'", guess, clues);

        let candidates = match finder.submit_guess(&guess, &clues) {
            Ok(candidates) => candidates.to_vec(),
            Err(SolverError::GuessLimitReached(limit)) => {
                interface.display_out_of_guesses(limit);
                continue;
            }
            Err(err) => {
                info_log!("game_loop() - rejected: {}", err);
                interface.display_error(&err);
                continue;
            }
        };
        // The load may have landed while we were blocked on input.
        if let Err(err) = announce_if_ready(finder, interface, &mut announced) {
            interface.display_error(&err);
            return GameOutcome::LoadFailed;
        }
        interface.display_candidates(&candidates);

        match check_game_state(&candidates) {
            GameState::Solved(solution) => {
                interface.display_solution_found(&solution);
                return GameOutcome::Solved(solution);
            }
            GameState::NoSolution => interface.display_no_candidates_message(),
            GameState::Continue => {}
        }
        if let Some(remaining) = finder.session().and_then(SolverSession::guesses_remaining) {
            interface.display_guesses_remaining(remaining);
        }
    }
}
