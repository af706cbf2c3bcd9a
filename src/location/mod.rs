//! Location subsystem.
//!
//! # Data Flow
//! ```text
//! Window (address + session history)
//!     → emits Trigger messages (hash change, pop state, link click)
//!     → hash.rs / history.rs (mode-specific raw location → RouteInfo)
//!     → base.rs (inject / strip the deployment prefix)
//!     → navigation state machine
//! ```
//!
//! # Design Decisions
//! - The core never touches browser APIs: `Window` is the only platform
//!   surface, and it speaks `Trigger` messages over a channel
//! - One adapter contract for both modes; the mode is an explicit value
//!   carried by the router, never process-wide state

pub mod base;
pub mod hash;
pub mod history;
pub mod window;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::RouteInfo;

pub use base::BasePath;
pub use hash::HashLocation;
pub use history::{Admission, HistoryLocation};
pub use window::Window;

/// Addressing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Route lives in the URL fragment: `#/users/1?tab=posts`.
    #[default]
    Hash,
    /// Route is the real path, backed by the session history stack.
    History,
}

impl Mode {
    /// Interpret a configured mode. Anything unrecognized falls back to hash.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("hash") => Mode::Hash,
            Some("history") => Mode::History,
            other => {
                tracing::warn!(
                    mode = ?other,
                    "Router mode is not set: should be \"hash\" or \"history\"; falling back to \"hash\""
                );
                Mode::Hash
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Hash => "hash",
            Mode::History => "history",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation between a mode's raw location and [`RouteInfo`].
pub trait LocationAdapter: Send + Sync + fmt::Debug {
    /// Raw location (fragment or path, with optional query) → parsed route.
    fn parse(&self, raw: &str) -> RouteInfo;

    /// Parsed route → raw location suitable for the address bar.
    fn encode(&self, route: &RouteInfo) -> String;

    /// Prefix `path` with the deployment base.
    fn apply_base(&self, path: &str) -> String;

    /// Remove the deployment base from `path`.
    fn strip_base(&self, path: &str) -> String;
}

/// The adapter a router was built with.
#[derive(Debug, Clone)]
pub enum Location {
    Hash(HashLocation),
    History(HistoryLocation),
}

impl Location {
    pub fn new(mode: Mode, base: BasePath) -> Self {
        match mode {
            Mode::Hash => Location::Hash(HashLocation::new()),
            Mode::History => Location::History(HistoryLocation::new(base)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Location::Hash(_) => Mode::Hash,
            Location::History(_) => Mode::History,
        }
    }

    fn adapter(&self) -> &dyn LocationAdapter {
        match self {
            Location::Hash(hash) => hash,
            Location::History(history) => history,
        }
    }
}

impl LocationAdapter for Location {
    fn parse(&self, raw: &str) -> RouteInfo {
        self.adapter().parse(raw)
    }

    fn encode(&self, route: &RouteInfo) -> String {
        self.adapter().encode(route)
    }

    fn apply_base(&self, path: &str) -> String {
        self.adapter().apply_base(path)
    }

    fn strip_base(&self, path: &str) -> String {
        self.adapter().strip_base(path)
    }
}
