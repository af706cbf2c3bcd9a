//! Route matching logic.
//!
//! # Responsibilities
//! - Exact pass: literal lookup of the canonical path
//! - Parameterized pass: segment-by-segment walk over every pattern
//! - Extract placeholder bindings for the winning route
//!
//! # Design Decisions
//! - The exact pass runs first and never binds parameters, so `/users/new`
//!   beats `/users/:id` wherever either sits in the table
//! - Segment counts must agree; there are no optional or wildcard segments
//! - An empty candidate segment past index 0 disqualifies the route even
//!   under a placeholder, so `/users//` never binds an empty id
//! - First qualifying route in table order wins

use thiserror::Error;

use crate::routing::info::{Params, RouteInfo};
use crate::routing::table::{PatternSegment, RouteDefinition, RouteTable};

/// The matcher found no route for a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("couldn't find a route matching `{0}`")]
    NotFound(String),
}

/// Winning route and the parameters bound by its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub index: usize,
    pub params: Params,
}

impl RouteTable {
    /// Resolve a parsed location against the table.
    pub fn resolve(&self, info: &RouteInfo) -> Result<RouteMatch, MatchError> {
        self.match_segments(&info.segments)
    }

    /// Resolve raw path segments (leading empty segment included).
    pub fn match_segments<S: AsRef<str>>(&self, segments: &[S]) -> Result<RouteMatch, MatchError> {
        let path = canonical_path(segments);

        if let Some(index) = self.position_of_path(&path) {
            return Ok(RouteMatch {
                index,
                params: Params::new(),
            });
        }

        let candidate: Vec<&str> = path.split('/').collect();
        self.iter()
            .enumerate()
            .find_map(|(index, route)| {
                match_pattern(route, &candidate).map(|params| RouteMatch { index, params })
            })
            .ok_or(MatchError::NotFound(path))
    }
}

pub(crate) fn canonical_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/");
    if joined.len() > 1 && joined.ends_with('/') {
        joined.pop();
    }
    joined
}

fn match_pattern(route: &RouteDefinition, candidate: &[&str]) -> Option<Params> {
    let pattern = route.pattern();
    if pattern.len() != candidate.len() {
        return None;
    }

    let mut params = Params::new();
    for (position, (expected, actual)) in pattern.iter().zip(candidate).enumerate() {
        if actual.is_empty() && position != 0 {
            return None;
        }
        match expected {
            PatternSegment::Literal(literal) if literal == actual => {}
            PatternSegment::Literal(_) => return None,
            PatternSegment::Placeholder(name) => {
                params.insert(name.clone(), (*actual).to_string());
            }
        }
    }
    Some(params)
}
