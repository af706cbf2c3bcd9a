//! Fragment-based addressing: `#/path?query`.

use crate::location::LocationAdapter;
use crate::routing::RouteInfo;

/// Hash-mode adapter.
///
/// The fragment is self-contained, so the deployment base plays no part
/// here: `apply_base` and `strip_base` return the path untouched.
#[derive(Debug, Clone, Default)]
pub struct HashLocation;

impl HashLocation {
    pub fn new() -> Self {
        Self
    }
}

impl LocationAdapter for HashLocation {
    fn parse(&self, raw: &str) -> RouteInfo {
        RouteInfo::parse(raw.strip_prefix('#').unwrap_or(raw))
    }

    fn encode(&self, route: &RouteInfo) -> String {
        format!("#{}", route.path_and_query())
    }

    fn apply_base(&self, path: &str) -> String {
        path.to_string()
    }

    fn strip_base(&self, path: &str) -> String {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment_with_query() {
        let info = HashLocation::new().parse("#/search?q=cats&page=2");
        assert_eq!(info.full_path, "/search");
        assert_eq!(info.query.len(), 2);
        assert_eq!(info.query["q"], "cats");
        assert_eq!(info.query["page"], "2");
    }

    #[test]
    fn test_parse_without_marker() {
        let adapter = HashLocation::new();
        assert_eq!(adapter.parse("/a/b"), adapter.parse("#/a/b"));
    }

    #[test]
    fn test_encode_round_trip() {
        let adapter = HashLocation::new();
        let info = adapter.parse("#/users/5?tab=posts&sort=new");
        let encoded = adapter.encode(&info);
        assert_eq!(encoded, "#/users/5?sort=new&tab=posts");
        assert_eq!(adapter.parse(&encoded), info);
    }
}
