//! In-memory browser window.
//!
//! # Responsibilities
//! - Hold the current address (path, query, fragment)
//! - Keep the session history stack with its restorable states
//! - Turn address changes into `Trigger` messages for the router
//!
//! # Design Decisions
//! - Mirrors browser semantics: assigning the same fragment is a no-op,
//!   `push_state` never fires an event, back/forward fire pop state
//!   (plus a hash change when the fragment differs)
//! - `push_state` never leaves the window's origin
//! - Events go out over an unbounded channel; a dropped receiver is ignored

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use url::Url;

use crate::error::RouterError;
use crate::navigation::trigger::{HistoryState, Trigger};

const ORIGIN: &str = "http://localhost/";

#[derive(Debug, Clone)]
struct HistoryEntry {
    url: Url,
    state: Option<HistoryState>,
}

#[derive(Debug)]
struct Session {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl Session {
    fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }
}

/// The platform surface the router talks to.
#[derive(Debug)]
pub struct Window {
    session: Mutex<Session>,
    events: mpsc::UnboundedSender<Trigger>,
}

impl Window {
    /// Open a window at `url` (absolute path, optional query and fragment).
    ///
    /// Returns the window and the receiving end of its event stream.
    pub fn open(
        url: &str,
    ) -> Result<(Arc<Self>, mpsc::UnboundedReceiver<Trigger>), RouterError> {
        let url = Url::parse(ORIGIN)?.join(url)?;
        let (events, receiver) = mpsc::unbounded_channel();
        let window = Self {
            session: Mutex::new(Session {
                entries: vec![HistoryEntry { url, state: None }],
                index: 0,
            }),
            events,
        };
        Ok((Arc::new(window), receiver))
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, trigger: Trigger) {
        if self.events.send(trigger).is_err() {
            tracing::trace!("Window event dropped: no listener");
        }
    }

    /// Full current address.
    pub fn href(&self) -> String {
        self.session().current().url.to_string()
    }

    /// Fragment without `#`; `None` when absent or empty.
    pub fn hash(&self) -> Option<String> {
        self.session()
            .current()
            .url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(String::from)
    }

    pub fn pathname(&self) -> String {
        self.session().current().url.path().to_string()
    }

    /// Query with its leading `?`, or empty.
    pub fn search(&self) -> String {
        self.session()
            .current()
            .url
            .query()
            .map(|q| format!("?{q}"))
            .unwrap_or_default()
    }

    pub fn path_and_query(&self) -> String {
        format!("{}{}", self.pathname(), self.search())
    }

    /// Assign the fragment. Adds a history entry and fires a hash change
    /// unless the fragment is unchanged.
    pub fn set_hash(&self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        {
            let mut session = self.session();
            let mut next = session.current().url.clone();
            next.set_fragment(Some(fragment));
            if next.fragment() == session.current().url.fragment() {
                return;
            }
            session.push(HistoryEntry {
                url: next,
                state: None,
            });
        }
        self.emit(Trigger::HashChanged);
    }

    /// Add a history entry carrying `state`, without firing any event.
    pub fn push_state(&self, state: HistoryState, url: &str) {
        let mut session = self.session();
        let next = match session.current().url.join(url) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "push_state rejected an unparsable url");
                return;
            }
        };
        if next.origin() != session.current().url.origin() {
            tracing::warn!(url = %url, "push_state rejected a cross-origin url");
            return;
        }
        session.push(HistoryEntry {
            url: next,
            state: Some(state),
        });
    }

    /// State of the current history entry.
    pub fn history_state(&self) -> Option<HistoryState> {
        self.session().current().state.clone()
    }

    pub fn history_len(&self) -> usize {
        self.session().entries.len()
    }

    /// Move through history by `delta` entries. Out-of-range moves do nothing.
    pub fn go(&self, delta: isize) {
        let (state, fragment_changed) = {
            let mut session = self.session();
            let Some(target) = session.index.checked_add_signed(delta) else {
                return;
            };
            if delta == 0 || target >= session.entries.len() {
                return;
            }
            let before = session.current().url.fragment().map(String::from);
            session.index = target;
            let entry = session.current();
            (
                entry.state.clone(),
                entry.url.fragment().map(String::from) != before,
            )
        };

        self.emit(Trigger::PopState(state));
        if fragment_changed {
            self.emit(Trigger::HashChanged);
        }
    }

    pub fn back(&self) {
        self.go(-1);
    }

    pub fn forward(&self) {
        self.go(1);
    }

    /// Hand a trigger to whoever listens (link interception, mounting).
    pub fn dispatch(&self, trigger: Trigger) {
        self.emit(trigger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::trigger::NavigationRequest;

    #[test]
    fn test_open_parses_address() {
        let (window, _rx) = Window::open("/app/users/5?tab=1#/frag").unwrap();
        assert_eq!(window.pathname(), "/app/users/5");
        assert_eq!(window.search(), "?tab=1");
        assert_eq!(window.hash().as_deref(), Some("/frag"));
        assert_eq!(window.history_len(), 1);
    }

    #[test]
    fn test_empty_fragment_reads_as_absent() {
        let (window, _rx) = Window::open("/#").unwrap();
        assert_eq!(window.hash(), None);
    }

    #[test]
    fn test_set_hash_fires_once_per_change() {
        let (window, mut rx) = Window::open("/").unwrap();
        window.set_hash("/users");
        window.set_hash("#/users");
        assert_eq!(rx.try_recv().unwrap(), Trigger::HashChanged);
        assert!(rx.try_recv().is_err());
        assert_eq!(window.hash().as_deref(), Some("/users"));
        assert_eq!(window.history_len(), 2);
    }

    #[test]
    fn test_push_state_is_silent() {
        let (window, mut rx) = Window::open("/").unwrap();
        window.push_state(HistoryState { path: "/a?x=1".into() }, "/a?x=1");
        assert!(rx.try_recv().is_err());
        assert_eq!(window.path_and_query(), "/a?x=1");
        assert_eq!(window.history_state().unwrap().path, "/a?x=1");
    }

    #[test]
    fn test_back_and_forward_pop_states() {
        let (window, mut rx) = Window::open("/").unwrap();
        window.push_state(HistoryState { path: "/a".into() }, "/a");
        window.push_state(HistoryState { path: "/b".into() }, "/b");

        window.back();
        assert_eq!(
            rx.try_recv().unwrap(),
            Trigger::PopState(Some(HistoryState { path: "/a".into() }))
        );
        window.back();
        assert_eq!(rx.try_recv().unwrap(), Trigger::PopState(None));
        window.back();
        assert!(rx.try_recv().is_err());

        window.forward();
        window.forward();
        assert_eq!(window.pathname(), "/b");
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let (window, _rx) = Window::open("/").unwrap();
        window.push_state(HistoryState { path: "/a".into() }, "/a");
        window.push_state(HistoryState { path: "/b".into() }, "/b");
        window.back();
        window.push_state(HistoryState { path: "/c".into() }, "/c");
        assert_eq!(window.history_len(), 3);
        window.forward();
        assert_eq!(window.pathname(), "/c");
    }

    #[test]
    fn test_back_across_fragment_fires_hash_change() {
        let (window, mut rx) = Window::open("/#/one").unwrap();
        window.set_hash("/two");
        let _ = rx.try_recv();

        window.back();
        assert_eq!(rx.try_recv().unwrap(), Trigger::PopState(None));
        assert_eq!(rx.try_recv().unwrap(), Trigger::HashChanged);
        assert_eq!(window.hash().as_deref(), Some("/one"));
    }

    #[test]
    fn test_push_state_stays_on_origin() {
        let (window, _rx) = Window::open("/a").unwrap();
        window.push_state(HistoryState { path: "//other/x".into() }, "//other/x");
        assert_eq!(window.href(), "http://localhost/a");
        assert_eq!(window.history_len(), 1);
        assert_eq!(window.history_state(), None);
    }

    #[test]
    fn test_open_rejects_unparsable_address() {
        let err = Window::open("http://[::1").unwrap_err();
        assert!(matches!(err, RouterError::InvalidUrl(_)));
    }

    #[test]
    fn test_dispatch_forwards_trigger() {
        let (window, mut rx) = Window::open("/").unwrap();
        let request = NavigationRequest {
            path: "/x".into(),
            need_add_base: true,
        };
        window.dispatch(Trigger::LinkClicked(request.clone()));
        assert_eq!(rx.try_recv().unwrap(), Trigger::LinkClicked(request));
    }
}
