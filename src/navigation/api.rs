//! Programmatic navigation.

use crate::error::RouterError;
use crate::location::{LocationAdapter, Mode};
use crate::navigation::router::Router;
use crate::navigation::trigger::{NavigationRequest, Trigger};
use crate::routing::RouteInfo;

impl Router {
    /// Navigate to `url` (path with optional query).
    ///
    /// Hash mode rewrites the fragment and lets the hash change drive the
    /// pipeline. History mode dispatches a request that is checked against
    /// the base as-is; use [`Router::push_request`] to have the base injected.
    pub fn push(&self, url: &str) {
        self.push_request(NavigationRequest::new(url));
    }

    pub fn push_request(&self, request: NavigationRequest) {
        tracing::debug!(
            path = %request.path,
            need_add_base = request.need_add_base,
            "Programmatic navigation"
        );
        match self.inner.mode {
            Mode::Hash => self.inner.window.set_hash(&request.path),
            Mode::History => self.inner.window.dispatch(Trigger::LinkClicked(request)),
        }
    }

    /// Navigate to the route registered under `name`.
    ///
    /// The route's path pattern is pushed literally; placeholders are not filled.
    pub fn push_by_name(&self, name: &str) -> Result<(), RouterError> {
        let route = self
            .inner
            .table
            .find_by_name(name)
            .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))?;
        self.push(&route.path);
        Ok(())
    }

    /// Address-bar form of `route` in this router's mode.
    pub fn href_for(&self, route: &RouteInfo) -> String {
        self.inner.location.encode(route)
    }
}
