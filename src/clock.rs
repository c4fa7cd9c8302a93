//! Wall-clock deadline for cooperative search cancellation.
//!
//! The search polls the deadline at every node; nothing fires a signal.

use std::time::{Duration, Instant};

/// An absolute point in time the search may not run past.
#[derive(Clone, Copy, Debug)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// Deadline at an absolute instant
    #[must_use]
    pub const fn at(instant: Instant) -> Self {
        Deadline(Some(instant))
    }

    /// Deadline a budget from now
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Deadline(Instant::now().checked_add(budget))
    }

    /// A deadline that never expires
    #[must_use]
    pub const fn unbounded() -> Self {
        Deadline(None)
    }

    /// True once the deadline has passed
    #[inline]
    #[must_use]
    pub fn expired(&self) -> bool {
        self.0.is_some_and(|deadline| Instant::now() > deadline)
    }

    /// Time left before expiry, `None` for an unbounded deadline
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.0
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_expires() {
        let deadline = Deadline::unbounded();
        assert!(!deadline.expired());
        assert!(deadline.remaining().is_none());
    }

    #[test]
    fn test_past_deadline_expired() {
        let deadline = Deadline::after(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(5));
        assert!(deadline.expired());
        assert_eq!(deadline.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn test_future_deadline_not_expired() {
        let deadline = Deadline::after(Duration::from_secs(3600));
        assert!(!deadline.expired());
        assert!(deadline.remaining().is_some());
    }
}
