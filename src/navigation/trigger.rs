//! Inbound navigation messages.

use serde::{Deserialize, Serialize};

/// A request to navigate, as produced by link interception or `push`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
    pub path: String,

    /// Prefix the configured base before checking and matching.
    #[serde(default)]
    pub need_add_base: bool,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            need_add_base: false,
        }
    }

    pub fn with_base(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            need_add_base: true,
        }
    }
}

/// Restorable state stored on each history entry the router pushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub path: String,
}

/// Everything that can start a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The rendering collaborator was created; navigate to the current address.
    Mount,
    /// The address fragment changed.
    HashChanged,
    /// A navigation request (link click, programmatic push in history mode).
    LinkClicked(NavigationRequest),
    /// Back/forward landed on an entry; `None` for entries the router never pushed.
    PopState(Option<HistoryState>),
}

impl Trigger {
    pub fn kind(&self) -> &'static str {
        match self {
            Trigger::Mount => "mount",
            Trigger::HashChanged => "hash_changed",
            Trigger::LinkClicked(_) => "link_clicked",
            Trigger::PopState(_) => "pop_state",
        }
    }
}
