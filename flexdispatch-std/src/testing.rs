//! Testing utilities for flexdispatch.
//!
//! - [`CallLog`]: An ordered record of which collaborators ran
//! - [`Tally`]: A shared invocation counter

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// A shared, ordered record of named calls.
///
/// Clone it into delegates, extensions and receivers to verify which of
/// them ran, and in which order.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let probe = log.clone();
/// dispatcher.extend(move |_: &Args| {
///     probe.record("xml");
///     Dispatch::Undetermined
/// });
///
/// dispatcher.call(args)?;
/// assert_eq!(log.entries(), vec!["xml"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, name: &'static str) {
        self.entries.lock().unwrap().push(name);
    }

    /// Get a copy of all entries in recording order.
    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.lock().unwrap().clone()
    }

    /// Count entries equal to `name`.
    pub fn count_of(&self, name: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| **entry == name)
            .count()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

// ============================================================================
// Tally
// ============================================================================

/// A shared counter for invocations.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    count: Arc<AtomicUsize>,
}

impl Tally {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter, returning the new count.
    pub fn bump(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_log_shared_between_clones() {
        let log = CallLog::new();
        let probe = log.clone();

        probe.record("delegate");
        probe.record("receiver");
        log.record("delegate");

        assert_eq!(log.entries(), vec!["delegate", "receiver", "delegate"]);
        assert_eq!(log.count_of("delegate"), 2);

        probe.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_tally() {
        let tally = Tally::new();
        let probe = tally.clone();

        assert_eq!(probe.bump(), 1);
        assert_eq!(probe.bump(), 2);
        assert_eq!(tally.count(), 2);

        tally.reset();
        assert_eq!(probe.count(), 0);
    }
}
