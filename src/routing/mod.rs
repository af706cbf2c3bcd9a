//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Location string ("/users/42?tab=posts")
//!     → info.rs (split into path segments + query)
//!     → matcher.rs (exact pass, then parameterized pass)
//!     → Return: table index + params, or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → table.rs (keep declared order)
//!     → Compile patterns (literal / placeholder segments)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact literal routes beat parameterized ones regardless of order
//! - Deterministic: among parameterized routes, table order breaks ties
//! - No-match is an expected outcome, carried as `None` (index -1)

pub mod info;
pub mod matcher;
pub mod table;

pub use info::{Params, Query, RouteInfo};
pub use matcher::{MatchError, RouteMatch};
pub use table::{RouteDefinition, RouteTable, ViewId};

/// Signed form of a resolved index: `-1` when nothing matched.
pub fn index_code(index: Option<usize>) -> i64 {
    index.map_or(-1, |i| i as i64)
}
