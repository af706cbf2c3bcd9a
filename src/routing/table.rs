//! Route table storage.
//!
//! # Responsibilities
//! - Store route definitions in declared order
//! - Pre-split every pattern into literal/placeholder segments
//! - Look up routes by name for name-based navigation
//!
//! # Design Decisions
//! - Immutable after construction; shared via `Arc` without locks
//! - Index into the table is the identity handed to the renderer

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;

/// Opaque view handle. The router never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub String);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One segment of a compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Must equal the candidate segment exactly.
    Literal(String),
    /// `:name` binds `name` to whatever sits at this position.
    Placeholder(String),
}

/// A registered route.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    /// Pattern as written, e.g. `/users/:id`.
    pub path: String,
    pub view: ViewId,
    pub name: Option<String>,
    pattern: Vec<PatternSegment>,
}

impl RouteDefinition {
    pub fn new(path: impl Into<String>, view: impl Into<String>, name: Option<String>) -> Self {
        let path = path.into();
        let pattern = path
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(param) => PatternSegment::Placeholder(param.to_string()),
                None => PatternSegment::Literal(segment.to_string()),
            })
            .collect();

        Self {
            path,
            view: ViewId(view.into()),
            name,
            pattern,
        }
    }

    /// Compiled segments, including the leading empty one for `/`-rooted paths.
    pub fn pattern(&self) -> &[PatternSegment] {
        &self.pattern
    }
}

impl From<&RouteConfig> for RouteDefinition {
    fn from(config: &RouteConfig) -> Self {
        Self::new(config.path.clone(), config.view.clone(), config.name.clone())
    }
}

/// Ordered, immutable list of routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Arc<[RouteDefinition]>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDefinition>) -> Self {
        Self {
            routes: routes.into(),
        }
    }

    pub fn from_config(configs: &[RouteConfig]) -> Self {
        Self::new(configs.iter().map(RouteDefinition::from).collect())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RouteDefinition> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    /// First route whose literal pattern equals `path`.
    pub fn position_of_path(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.path == path)
    }

    /// First route carrying `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|r| r.name.as_deref() == Some(name))
    }
}
