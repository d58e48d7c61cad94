//! Refresh Plumbing
//!
//! Latest-wins request tickets and owned polling timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Monotonic ticket dispenser for superseding fetches.
///
/// A view that can have overlapping requests in flight takes a ticket before
/// each fetch and applies the response only while that ticket is still the
/// newest one, so rapid range switching cannot let a stale response
/// overwrite a newer one.
#[derive(Clone, Default)]
pub struct FetchSequence(Rc<Cell<u64>>);

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tickets
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether a ticket still belongs to the newest request
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Owned repeating timer.
///
/// The mounting component keeps the poller and cancels it in `on_cleanup`,
/// so a dismounted panel never ticks again. Dropping the last handle also
/// cancels the underlying interval.
#[derive(Clone)]
pub struct Poller {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl Poller {
    /// Start ticking every `period_ms` milliseconds
    pub fn start(period_ms: u32, mut tick: impl FnMut() + 'static) -> Self {
        let interval = Interval::new(period_ms, move || tick());
        Self {
            interval: Rc::new(RefCell::new(Some(interval))),
        }
    }

    /// Stop ticking. Safe to call more than once.
    pub fn cancel(&self) {
        if let Some(interval) = self.interval.borrow_mut().take() {
            interval.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic() {
        let sequence = FetchSequence::new();
        assert_eq!(sequence.begin(), 1);
        assert_eq!(sequence.begin(), 2);
        assert_eq!(sequence.begin(), 3);
    }

    #[test]
    fn only_the_newest_ticket_is_current() {
        let sequence = FetchSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let sequence = FetchSequence::new();
        let shared = sequence.clone();

        let ticket = sequence.begin();
        assert!(shared.is_current(ticket));

        shared.begin();
        assert!(!sequence.is_current(ticket));
    }
}
