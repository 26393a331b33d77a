use crate::error::SolverError;
use crate::wordbank::{Dictionary, WordbankSource};
use crate::{debug_log, info_log};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

type LoadResult = Result<Dictionary, SolverError>;

/// A dictionary being loaded on a worker thread.
///
/// The load runs once and can't be cancelled. The result is handed over
/// exactly once, through [`try_take`](Self::try_take) or [`wait`](Self::wait).
#[derive(Debug)]
pub struct PendingDictionary {
    receiver: Receiver<LoadResult>,
}

impl PendingDictionary {
    pub fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> LoadResult + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            debug_log!("Dictionary load started");
            // The receiver may be gone if the caller gave up; nothing to do then.
            let _ = tx.send(load());
        });
        Self { receiver: rx }
    }

    pub fn from_source(source: WordbankSource) -> Self {
        info_log!("Loading dictionary from {}", source);
        Self::spawn(move || source.load())
    }

    /// Take the result if the load has finished.
    ///
    /// # Errors
    /// `NotReady` while loading, the load's own error if it failed, and
    /// `LoadFailed` if the worker is gone (already taken, or it panicked).
    pub fn try_take(&mut self) -> Result<Dictionary, SolverError> {
        match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => Err(SolverError::NotReady),
            Err(TryRecvError::Disconnected) => Err(worker_gone()),
        }
    }

    /// Block until the load finishes.
    pub fn wait(self) -> Result<Dictionary, SolverError> {
        self.receiver.recv().map_err(|_| worker_gone())?
    }
}

fn worker_gone() -> SolverError {
    SolverError::LoadFailed("loader thread exited without a result".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::load_dictionary;

    #[test]
    fn test_not_ready_until_load_finishes() {
        let (release, gate) = mpsc::channel::<()>();
        let mut pending = PendingDictionary::spawn(move || {
            let _ = gate.recv();
            load_dictionary("APPLE ANGLE")
        });

        assert!(pending.try_take().unwrap_err().is_not_ready());

        release.send(()).unwrap();
        let dictionary = pending.wait().unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_load_error_is_delivered() {
        let pending = PendingDictionary::from_source(WordbankSource::Text(String::new()));
        assert!(pending.wait().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_result_is_handed_over_once() {
        let (done_tx, done_rx) = mpsc::channel::<()>();
        let mut pending = PendingDictionary::spawn(move || {
            let result = load_dictionary("OAK ELM");
            let _ = done_tx.send(());
            result
        });
        done_rx.recv().unwrap();

        // The send happens right after the signal; poll until it lands.
        let dictionary = loop {
            match pending.try_take() {
                Err(SolverError::NotReady) => thread::yield_now(),
                other => break other.unwrap(),
            }
        };
        assert_eq!(dictionary.len(), 2);

        // Once the worker drops its sender, further takes fail for good.
        let second = loop {
            match pending.try_take() {
                Err(SolverError::NotReady) => thread::yield_now(),
                other => break other,
            }
        };
        assert!(matches!(second, Err(SolverError::LoadFailed(_))));
    }

    #[test]
    fn test_panicking_loader_becomes_load_failed() {
        let pending = PendingDictionary::spawn(|| panic!("boom"));
        assert!(matches!(pending.wait(), Err(SolverError::LoadFailed(_))));
    }
}
