//! Deployment base prefix.

use std::fmt;

/// A normalized base prefix: empty, or `/segment/.../` with exactly one
/// leading and one trailing slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let mut base = String::with_capacity(raw.len() + 2);
        if !raw.starts_with('/') {
            base.push('/');
        }
        base.push_str(raw);
        if !base.ends_with('/') {
            base.push('/');
        }
        Self(base)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `path` lives under this base. Always true for an empty base.
    pub fn covers(&self, path: &str) -> bool {
        path.starts_with(&self.0)
    }

    /// Inject the base in front of `path`, dropping one leading slash from it.
    pub fn apply(&self, path: &str) -> String {
        if self.is_empty() {
            return path.to_string();
        }
        let relative = path.strip_prefix('/').unwrap_or(path);
        format!("{}{}", self.0, relative)
    }

    /// Remove the base if present; the result always starts with `/`.
    pub fn strip(&self, path: &str) -> String {
        let stripped = if self.is_empty() {
            path
        } else {
            path.strip_prefix(self.0.as_str()).unwrap_or(path)
        };
        if stripped.starts_with('/') {
            stripped.to_string()
        } else {
            format!("/{stripped}")
        }
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
