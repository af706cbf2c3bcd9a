//! Navigation hooks.
//!
//! # Responsibilities
//! - Gate each navigation on an optional before-guard
//! - Notify the renderer of the committed table index
//! - Run an optional after-notifier once committed
//!
//! # Design Decisions
//! - The guard only delays: it gets a one-shot `Proceed` handle and has no
//!   way to cancel or redirect
//! - No timeout: a guard that holds `Proceed` forever holds the navigation forever
//! - Dropping `Proceed` without calling it is read as "never proceeds"
//! - Hook panics are not caught; they unwind into whoever drove the trigger

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::oneshot;

use crate::observability::metrics;
use crate::routing::RouteInfo;

/// Before-guard: `(to, from, proceed)`.
pub type BeforeEachFn = dyn Fn(&RouteInfo, Option<&RouteInfo>, Proceed) + Send + Sync;

/// After-notifier: `(to, from)`.
pub type AfterEachFn = dyn Fn(&RouteInfo, Option<&RouteInfo>) + Send + Sync;

/// Commit notifier: resolved table index, `None` when nothing matched.
pub type CommitFn = dyn Fn(Option<usize>) + Send + Sync;

/// Continuation handed to a before-guard. Call [`Proceed::proceed`] to let
/// the navigation commit; it may be moved into another task and called later.
pub struct Proceed {
    tx: oneshot::Sender<()>,
}

impl Proceed {
    fn channel() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    pub fn proceed(self) {
        // The pipeline may already be gone if the runtime shut down.
        let _ = self.tx.send(());
    }
}

impl fmt::Debug for Proceed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proceed")
            .field("pending", &!self.tx.is_closed())
            .finish()
    }
}

/// The configured hooks of a router.
#[derive(Clone, Default)]
pub struct Hooks {
    pub before_each: Option<Arc<BeforeEachFn>>,
    pub after_each: Option<Arc<AfterEachFn>>,
    pub on_commit: Option<Arc<CommitFn>>,
}

impl Hooks {
    /// Run the before-guard and wait for it to proceed.
    ///
    /// Returns `false` when the guard dropped its handle without proceeding.
    pub async fn before(&self, to: &RouteInfo, from: Option<&RouteInfo>) -> bool {
        let Some(guard) = &self.before_each else {
            return true;
        };

        let started = Instant::now();
        let (proceed, gate) = Proceed::channel();
        guard(to, from, proceed);

        let resumed = gate.await.is_ok();
        if resumed {
            metrics::record_guard_wait(started);
        }
        resumed
    }

    pub fn commit(&self, index: Option<usize>) {
        if let Some(on_commit) = &self.on_commit {
            on_commit(index);
        }
    }

    pub fn after(&self, to: &RouteInfo, from: Option<&RouteInfo>) {
        if let Some(after_each) = &self.after_each {
            after_each(to, from);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_each", &self.before_each.is_some())
            .field("after_each", &self.after_each.is_some())
            .field("on_commit", &self.on_commit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_guard_resolves_immediately() {
        let hooks = Hooks::default();
        assert!(hooks.before(&RouteInfo::parse("/"), None).await);
    }

    #[tokio::test]
    async fn test_guard_sees_to_and_from() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let hooks = Hooks {
            before_each: Some(Arc::new(move |to: &RouteInfo, from: Option<&RouteInfo>, proceed: Proceed| {
                log.lock().unwrap().push((
                    to.full_path.clone(),
                    from.map(|f| f.full_path.clone()),
                ));
                proceed.proceed();
            })),
            ..Default::default()
        };

        let from = RouteInfo::parse("/a");
        assert!(hooks.before(&RouteInfo::parse("/b"), Some(&from)).await);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("/b".to_string(), Some("/a".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_guard_can_defer() {
        let hooks = Hooks {
            before_each: Some(Arc::new(|_: &RouteInfo, _: Option<&RouteInfo>, proceed: Proceed| {
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    proceed.proceed();
                });
            })),
            ..Default::default()
        };
        assert!(hooks.before(&RouteInfo::parse("/"), None).await);
    }

    #[tokio::test]
    async fn test_dropped_proceed_never_resumes() {
        let hooks = Hooks {
            before_each: Some(Arc::new(|_: &RouteInfo, _: Option<&RouteInfo>, proceed: Proceed| {
                drop(proceed);
            })),
            ..Default::default()
        };
        assert!(!hooks.before(&RouteInfo::parse("/"), None).await);
    }

    #[tokio::test]
    async fn test_held_proceed_blocks() {
        let parked = Arc::new(Mutex::new(None));
        let slot = parked.clone();
        let hooks = Hooks {
            before_each: Some(Arc::new(move |_: &RouteInfo, _: Option<&RouteInfo>, proceed: Proceed| {
                *slot.lock().unwrap() = Some(proceed);
            })),
            ..Default::default()
        };

        let to = RouteInfo::parse("/");
        let gate = hooks.before(&to, None);
        let waited = tokio::time::timeout(Duration::from_millis(50), gate).await;
        assert!(waited.is_err());
        assert!(parked.lock().unwrap().is_some());
    }
}
