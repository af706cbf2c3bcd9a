//! Navigation state tracking.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;

/// Where the router stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationState {
    /// Nothing has been committed and nothing is pending.
    Idle,
    /// At least one navigation is waiting on its before-guard.
    ///
    /// A guard that drops its `Proceed` handle keeps the router here for good,
    /// even after later navigations commit.
    Resolving,
    /// A route is current and nothing is pending.
    Committed,
}

/// Counters behind [`NavigationState`].
///
/// Overlapping navigations are not serialized; each gets a generation
/// number so logs and callers can tell them apart. The last one to
/// commit wins, whatever its generation.
#[derive(Debug, Default)]
pub struct StateTracker {
    pending: AtomicUsize,
    started: AtomicU64,
    committed: AtomicU64,
}

impl StateTracker {
    /// Enter `Resolving`; returns this navigation's generation.
    pub fn begin(&self) -> u64 {
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.started.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Leave `Resolving` for a navigation that committed.
    pub fn commit(&self, generation: u64) {
        self.committed.store(generation, Ordering::SeqCst);
        self.pending.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Generation of the navigation that committed last, 0 if none did.
    pub fn committed_generation(&self) -> u64 {
        self.committed.load(Ordering::SeqCst)
    }

    pub fn state(&self, has_current: bool) -> NavigationState {
        if self.pending() > 0 {
            NavigationState::Resolving
        } else if has_current {
            NavigationState::Committed
        } else {
            NavigationState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let tracker = StateTracker::default();
        assert_eq!(tracker.state(false), NavigationState::Idle);

        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!((first, second), (1, 2));
        assert_eq!(tracker.state(false), NavigationState::Resolving);

        // later generation resolves first, earlier one overwrites it
        tracker.commit(second);
        assert_eq!(tracker.state(true), NavigationState::Resolving);
        tracker.commit(first);
        assert_eq!(tracker.state(true), NavigationState::Committed);
        assert_eq!(tracker.committed_generation(), 1);
    }

    #[test]
    fn test_abandoned_navigation_stays_pending() {
        let tracker = StateTracker::default();
        let _abandoned = tracker.begin();
        let later = tracker.begin();

        tracker.commit(later);
        assert_eq!(tracker.pending(), 1);
        assert_eq!(tracker.state(true), NavigationState::Resolving);
    }
}
