//! Trailing-edge debouncing of change triggers.

use std::time::Duration;

use tokio::sync::mpsc;

/// Why an extraction pass was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First pass when watching starts
    Initial,
    /// The page snapshot was rewritten
    SnapshotChanged,
    /// The settings file changed
    SettingsChanged,
}

/// Collapses bursts of triggers into one.
///
/// A burst ends once no trigger arrived for `window`; only its last trigger
/// is returned.
pub struct Debouncer<T> {
    rx: mpsc::Receiver<T>,
    window: Duration,
}

impl<T> Debouncer<T> {
    pub fn new(rx: mpsc::Receiver<T>, window: Duration) -> Self {
        Self { rx, window }
    }

    /// Waits for the next burst and returns its last trigger.
    ///
    /// Returns `None` once every sender is dropped and nothing is pending.
    pub async fn next(&mut self) -> Option<T> {
        let mut last = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.window, self.rx.recv()).await {
                Ok(Some(trigger)) => last = trigger,
                Ok(None) | Err(_) => return Some(last),
            }
        }
    }
}
