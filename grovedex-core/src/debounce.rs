//! Keystroke debounce for the search box.
//!
//! Re-filtering on every character thrashes the view, so the search
//! term is committed only after a short pause in typing. The clock is
//! injected on every call, which keeps the struct deterministic under
//! test.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the committed search term.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug)]
pub struct SearchDebounce {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self::with_delay(SEARCH_DEBOUNCE)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record the input's current text. Each call restarts the delay.
    pub fn push(&mut self, term: impl Into<String>, now: Instant) {
        self.pending = Some((term.into(), now + self.delay));
    }

    /// Return the pending term once its delay has elapsed. At most one
    /// commit per pause: later polls return `None` until the next
    /// `push`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if due {
            self.pending.take().map(|(term, _)| term)
        } else {
            None
        }
    }

    /// Commit the pending term immediately, if any.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(term, _)| term)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commits_only_after_the_delay() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_delay(Duration::from_millis(200));

        debounce.push("br", start);
        assert_eq!(debounce.poll(start + Duration::from_millis(100)), None);
        assert_eq!(
            debounce.poll(start + Duration::from_millis(200)),
            Some("br".to_string())
        );
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_new_keystrokes_restart_the_delay() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_delay(Duration::from_millis(200));

        debounce.push("b", start);
        debounce.push("br", start + Duration::from_millis(150));
        // The first keystroke's deadline has passed, but it was superseded.
        assert_eq!(debounce.poll(start + Duration::from_millis(250)), None);
        assert_eq!(
            debounce.poll(start + Duration::from_millis(350)),
            Some("br".to_string())
        );
    }

    #[test]
    fn test_flush_commits_immediately() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new();
        debounce.push("bread", start);
        assert_eq!(debounce.flush(), Some("bread".to_string()));
        assert_eq!(debounce.flush(), None);
    }
}
