use crate::clue::Guess;
use crate::error::SolverError;
use crate::info_log;
use crate::loader::PendingDictionary;
use crate::session::{SessionConfig, SolverSession};
use crate::wordbank::Dictionary;
use crate::word::Word;

#[derive(Debug)]
enum FinderState {
    Loading(PendingDictionary),
    Ready(SolverSession),
    Failed(String),
}

/// What a front-end talks to: owns the dictionary load and, once it lands,
/// the solving session.
///
/// Calls made before the load completes fail with `NotReady` instead of
/// pretending the word list is empty.
#[derive(Debug)]
pub struct WordFinder {
    state: FinderState,
    config: SessionConfig,
}

impl WordFinder {
    pub fn new(pending: PendingDictionary, config: SessionConfig) -> Self {
        Self {
            state: FinderState::Loading(pending),
            config,
        }
    }

    pub fn from_dictionary(dictionary: Dictionary, config: SessionConfig) -> Self {
        Self {
            state: FinderState::Ready(SolverSession::with_config(dictionary, config)),
            config,
        }
    }

    /// Check on the load without blocking. `Ok(true)` once ready.
    /// A failed load reports its own error once, then `LoadFailed`.
    pub fn poll(&mut self) -> Result<bool, SolverError> {
        let result = match &mut self.state {
            FinderState::Ready(_) => return Ok(true),
            FinderState::Failed(reason) => return Err(SolverError::LoadFailed(reason.clone())),
            FinderState::Loading(pending) => pending.try_take(),
        };
        self.settle(result)
    }

    /// Block until the load finishes.
    pub fn wait(&mut self) -> Result<&mut SolverSession, SolverError> {
        let state = std::mem::replace(&mut self.state, FinderState::Failed(String::new()));
        let result = match state {
            FinderState::Loading(pending) => pending.wait(),
            other => {
                self.state = other;
                return self.session_mut();
            }
        };
        self.settle(result)?;
        self.session_mut()
    }

    fn settle(&mut self, result: Result<Dictionary, SolverError>) -> Result<bool, SolverError> {
        match result {
            Ok(dictionary) => {
                info_log!("Word list ready: {} words", dictionary.len());
                self.state = FinderState::Ready(SolverSession::with_config(dictionary, self.config));
                Ok(true)
            }
            Err(SolverError::NotReady) => Ok(false),
            Err(err) => {
                log::error!("Word list failed to load: {err}");
                self.state = FinderState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    pub fn session(&self) -> Option<&SolverSession> {
        match &self.state {
            FinderState::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// The session, picking up a finished load on the way. `NotReady` while loading.
    pub fn session_mut(&mut self) -> Result<&mut SolverSession, SolverError> {
        if !self.poll()? {
            return Err(SolverError::NotReady);
        }
        match &mut self.state {
            FinderState::Ready(session) => Ok(session),
            _ => Err(SolverError::NotReady),
        }
    }

    pub fn submit_guess(&mut self, guess: &str, clues: &str) -> Result<&[Word], SolverError> {
        self.session_mut()?.submit_guess(guess, clues)
    }

    pub fn reset(&mut self) -> Result<(), SolverError> {
        self.session_mut()?.reset();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<Option<Guess>, SolverError> {
        self.session_mut()?.undo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::{WordbankSource, load_dictionary};
    use std::sync::mpsc;

    fn gated() -> (mpsc::Sender<()>, WordFinder) {
        let (release, gate) = mpsc::channel::<()>();
        let pending = PendingDictionary::spawn(move || {
            let _ = gate.recv();
            load_dictionary("APPLE ANGLE AMPLE")
        });
        (release, WordFinder::new(pending, SessionConfig::default()))
    }

    #[test]
    fn test_submit_before_load_is_not_ready() {
        let (release, mut finder) = gated();
        assert!(finder.submit_guess("APPLE", "GGGGG").unwrap_err().is_not_ready());
        assert!(finder.reset().unwrap_err().is_not_ready());
        assert!(finder.session().is_none());

        release.send(()).unwrap();
        finder.wait().unwrap();
        let matches = finder.submit_guess("APPLE", "GGGGG").unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_wait_when_already_ready() {
        let dictionary = load_dictionary("OAK ELM").unwrap();
        let mut finder = WordFinder::from_dictionary(dictionary, SessionConfig::default());
        assert!(finder.poll().unwrap());
        assert_eq!(finder.wait().unwrap().candidates().len(), 2);
    }

    #[test]
    fn test_failed_load_stays_failed() {
        let pending = PendingDictionary::from_source(WordbankSource::Text("   ".to_string()));
        let mut finder = WordFinder::new(pending, SessionConfig::default());
        assert!(finder.wait().unwrap_err().is_invalid_input());
        assert!(matches!(
            finder.submit_guess("APPLE", "GGGGG"),
            Err(SolverError::LoadFailed(_))
        ));
        assert!(matches!(finder.poll(), Err(SolverError::LoadFailed(_))));
    }

    #[test]
    fn test_reset_and_undo_through_finder() {
        let dictionary = load_dictionary("APPLE ANGLE AMPLE").unwrap();
        let mut finder = WordFinder::from_dictionary(dictionary, SessionConfig::default());
        finder.submit_guess("APPLE", "GGGGG").unwrap();
        assert!(finder.undo().unwrap().is_some());
        finder.submit_guess("ANGLE", "GGGGG").unwrap();
        finder.reset().unwrap();
        let session = finder.session().unwrap();
        assert!(session.history().is_empty());
        assert_eq!(session.candidates().len(), 3);
    }
}
