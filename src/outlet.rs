//! Rendering boundary.
//!
//! The outlet is where views get mounted. It owns no rendering itself: it
//! checks the mount target exists, kicks off the first navigation, and maps
//! committed indices back to view handles for whoever renders.

use std::collections::HashSet;

use crate::error::RouterError;
use crate::navigation::{Router, Trigger};
use crate::routing::ViewId;

/// The element ids available for mounting.
#[derive(Debug, Clone, Default)]
pub struct Document {
    ids: HashSet<String>,
}

impl Document {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

/// A mounted router.
#[derive(Debug, Clone)]
pub struct RouterOutlet {
    router: Router,
}

impl RouterOutlet {
    /// Mount `router` into `document` and start the initial navigation.
    pub fn create(router: Router, document: &Document) -> Result<Self, RouterError> {
        let target = router.mount_target();
        if !document.contains(target) {
            tracing::error!(mount_target = %target, "Router outlet mount target missing");
            return Err(RouterError::MountTargetMissing(target.to_string()));
        }

        tracing::info!(mount_target = %target, "Router outlet mounted");
        router.window().dispatch(Trigger::Mount);
        Ok(Self { router })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// View for a committed index; `None` for no match or an unknown index.
    pub fn view_for(&self, index: Option<usize>) -> Option<&ViewId> {
        index
            .and_then(|i| self.router.routes().get(i))
            .map(|route| &route.view)
    }
}
