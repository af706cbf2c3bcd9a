//! Configuration schema definitions.
//!
//! Everything a router needs that can live in a file. Hooks are code and are
//! attached through [`crate::navigation::RouterBuilder`].

use serde::{Deserialize, Serialize};

/// Root configuration for a router instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterSettings {
    /// Addressing mode, `"hash"` or `"history"`.
    ///
    /// Kept as a raw string: unknown values are recovered at build time.
    pub mode: Option<String>,

    /// Path prefix the application is mounted under (e.g. `"/app/"`).
    pub base: String,

    /// Element id the rendering collaborator mounts into.
    pub mount_target: String,

    /// Ordered route table. Order matters: first structural match wins.
    pub routes: Vec<RouteConfig>,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            mode: None,
            base: String::new(),
            mount_target: "router-outlet".to_string(),
            routes: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One route definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern; segments starting with `:` are placeholders.
    pub path: String,

    /// Opaque view handle passed through to the renderer.
    pub view: String,

    /// Optional name for name-based navigation.
    #[serde(default)]
    pub name: Option<String>,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            view: view.into(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (trace, debug, info, warn, error).
    pub log_level: String,

    /// Colored output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: true,
        }
    }
}
