//! Path-based addressing backed by session history.
//!
//! # Responsibilities
//! - Inject the base prefix when a request asks for it
//! - Reject requests that fall outside the base
//! - Strip the base before the path reaches the matcher
//!
//! # Design Decisions
//! - Replays of back/forward motions skip the base check and never push
//! - An out-of-base request is dropped silently, not reported as an error

use crate::location::base::BasePath;
use crate::location::LocationAdapter;
use crate::navigation::trigger::NavigationRequest;
use crate::routing::RouteInfo;

/// History-mode adapter.
#[derive(Debug, Clone, Default)]
pub struct HistoryLocation {
    base: BasePath,
}

/// An accepted history navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    /// Address as it goes into the address bar and the history entry.
    pub address: String,
    /// Base-stripped path (with query) that gets parsed and matched.
    pub path: String,
}

impl HistoryLocation {
    pub fn new(base: BasePath) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Decide whether a request may navigate.
    ///
    /// `replay` marks a back/forward motion restoring a stored entry.
    pub fn admit(&self, request: &NavigationRequest, replay: bool) -> Option<Admission> {
        let address = if request.need_add_base && !self.base.is_empty() {
            self.base.apply(&request.path)
        } else {
            request.path.clone()
        };

        if !replay && !self.base.covers(&address) {
            return None;
        }

        let path = self.base.strip(&address);
        Some(Admission { address, path })
    }
}

impl LocationAdapter for HistoryLocation {
    fn parse(&self, raw: &str) -> RouteInfo {
        RouteInfo::parse(&self.base.strip(raw))
    }

    fn encode(&self, route: &RouteInfo) -> String {
        self.base.apply(&route.path_and_query())
    }

    fn apply_base(&self, path: &str) -> String {
        self.base.apply(path)
    }

    fn strip_base(&self, path: &str) -> String {
        self.base.strip(path)
    }
}
