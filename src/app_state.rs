//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Ledger};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ledger shared by all requests.
    ///
    /// Handlers must hold the lock for the whole check-then-mutate sequence of
    /// an operation, otherwise two requests could both pass a check against
    /// the same remaining budget.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] that serves `ledger`.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Acquire the ledger lock.
    ///
    /// # Errors
    ///
    /// Returns [Error::LedgerLockError] if another thread panicked while holding the lock.
    pub fn lock_ledger(&self) -> Result<MutexGuard<'_, Ledger>, Error> {
        self.ledger.lock().map_err(|error| {
            tracing::error!("could not acquire the ledger lock: {error}");
            Error::LedgerLockError
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Ledger::new())
    }
}
