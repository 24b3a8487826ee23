//! Single-resolution result slot for a session.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use crate::error::Error;
use crate::morse::Text;

/// Resolves once with `Some(text)` on finish or `None` on cancel.
///
/// Later resolve attempts are rejected, so a double-fired gesture can never
/// overwrite the first result.
pub struct Completion<M: RawMutex> {
    resolved: Mutex<M, Cell<bool>>,
    signal: Signal<M, Option<Text>>,
}

impl<M: RawMutex> Completion<M> {
    pub const fn new() -> Self {
        Self {
            resolved: Mutex::new(Cell::new(false)),
            signal: Signal::new(),
        }
    }

    /// Deliver the session result. Fails with [`Error::AlreadyResolved`]
    /// on every call after the first.
    pub fn resolve(&self, result: Option<Text>) -> Result<(), Error> {
        let already = self.resolved.lock(|r| r.replace(true));
        if already {
            return Err(Error::AlreadyResolved);
        }
        self.signal.signal(result);
        Ok(())
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.lock(|r| r.get())
    }

    /// Wait for the result.
    pub async fn wait(&self) -> Option<Text> {
        self.signal.wait().await
    }

    /// Take the result if it has been delivered and not yet taken.
    pub fn try_take(&self) -> Option<Option<Text>> {
        self.signal.try_take()
    }
}

impl<M: RawMutex> Default for Completion<M> {
    fn default() -> Self {
        Self::new()
    }
}
