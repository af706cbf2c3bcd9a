//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject route patterns that can never match a parsed location
//! - Keep route names unique so name-based navigation is unambiguous
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: RouterSettings → Result<(), Vec<ValidationError>>
//! - The addressing mode is not checked here; it is recovered, not rejected

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterSettings;

/// A single semantic problem in a [`RouterSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty path")]
    EmptyRoutePath { index: usize },

    #[error("route #{index} path `{path}` must start with `/`")]
    RelativeRoutePath { index: usize, path: String },

    #[error("route name `{name}` is used more than once")]
    DuplicateRouteName { name: String },

    #[error("mount target id is empty")]
    EmptyMountTarget,
}

/// Check a settings value, collecting every problem found.
pub fn validate_settings(settings: &RouterSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_names = HashSet::new();

    for (index, route) in settings.routes.iter().enumerate() {
        if route.path.is_empty() {
            errors.push(ValidationError::EmptyRoutePath { index });
        } else if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativeRoutePath {
                index,
                path: route.path.clone(),
            });
        }

        if let Some(name) = &route.name {
            if !seen_names.insert(name.as_str()) {
                errors.push(ValidationError::DuplicateRouteName { name: name.clone() });
            }
        }
    }

    if settings.mount_target.trim().is_empty() {
        errors.push(ValidationError::EmptyMountTarget);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
