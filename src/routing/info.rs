//! Parsed navigation state.

use std::collections::HashMap;

use serde::Serialize;

use crate::routing::matcher::canonical_path;

/// Query string pairs. Last occurrence of a key wins.
pub type Query = HashMap<String, String>;

/// Placeholder bindings produced by the matcher.
pub type Params = HashMap<String, String>;

/// A location broken into the pieces the matcher and hooks work with.
///
/// Built fresh for every navigation attempt and replaced wholesale by the
/// next one. `params` is the only field filled in after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// Path portion, query stripped.
    pub full_path: String,

    /// `full_path` split on `/`. A rooted path starts with an empty segment.
    pub segments: Vec<String>,

    pub query: Query,

    pub params: Params,
}

impl RouteInfo {
    /// Parse `path?key=value&...`. Keys and values are taken verbatim, no decoding.
    pub fn parse(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (location, Query::new()),
        };

        Self {
            full_path: path.to_string(),
            segments: path.split('/').map(String::from).collect(),
            query,
            params: Params::new(),
        }
    }

    /// Segments joined back with the trailing `/` dropped, unless the path is exactly root.
    pub fn canonical_path(&self) -> String {
        canonical_path(&self.segments)
    }

    /// Query re-serialized with keys in sorted order, `None` when empty.
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let mut pairs: Vec<_> = self.query.iter().collect();
        pairs.sort();
        Some(
            pairs
                .into_iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&"),
        )
    }

    /// `full_path` plus `?query` when there is one.
    pub fn path_and_query(&self) -> String {
        match self.query_string() {
            Some(query) => format!("{}?{}", self.full_path, query),
            None => self.full_path.clone(),
        }
    }
}

/// Split `a=1&b=2` on `&`, then each pair on its first `=`.
///
/// Empty pairs are skipped; a pair without `=` maps to an empty value.
pub fn parse_query(raw: &str) -> Query {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_and_query() {
        let info = RouteInfo::parse("/search?q=cats&page=2");
        assert_eq!(info.full_path, "/search");
        assert_eq!(info.segments, vec!["", "search"]);
        assert_eq!(info.query.get("q").map(String::as_str), Some("cats"));
        assert_eq!(info.query.get("page").map(String::as_str), Some("2"));
        assert!(info.params.is_empty());
    }

    #[test]
    fn test_root_has_two_empty_segments() {
        let info = RouteInfo::parse("/");
        assert_eq!(info.segments, vec!["", ""]);
        assert_eq!(info.canonical_path(), "/");
    }

    #[test]
    fn test_trailing_slash_normalized() {
        assert_eq!(RouteInfo::parse("/users/1/").canonical_path(), "/users/1");
        assert_eq!(RouteInfo::parse("/users/1").canonical_path(), "/users/1");
        // only one slash is dropped
        assert_eq!(RouteInfo::parse("/users//").canonical_path(), "/users/");
    }

    #[test]
    fn test_query_edge_cases() {
        let query = parse_query("a=1&a=2&flag&&expr=x=y");
        assert_eq!(query.get("a").map(String::as_str), Some("2"));
        assert_eq!(query.get("flag").map(String::as_str), Some(""));
        assert_eq!(query.get("expr").map(String::as_str), Some("x=y"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_values_not_decoded() {
        let info = RouteInfo::parse("/s?q=hello%20world+x");
        assert_eq!(info.query["q"], "hello%20world+x");
    }

    #[test]
    fn test_only_first_question_mark_splits() {
        let info = RouteInfo::parse("/s?next=/a?b=1");
        assert_eq!(info.full_path, "/s");
        assert_eq!(info.query["next"], "/a?b=1");
    }

    #[test]
    fn test_path_and_query_reparses() {
        let info = RouteInfo::parse("/list?sort=asc&page=3");
        assert_eq!(info.path_and_query(), "/list?page=3&sort=asc");
        assert_eq!(RouteInfo::parse(&info.path_and_query()), info);
    }
}
