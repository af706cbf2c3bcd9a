//! Client-side navigation engine.
//!
//! Maps a browser-style location (URL fragment, or path backed by session
//! history) to a current route, and tells a renderer which view to show.

pub mod config;
pub mod error;
pub mod location;
pub mod navigation;
pub mod observability;
pub mod outlet;
pub mod routing;

pub use config::RouterSettings;
pub use error::RouterError;
pub use location::{Mode, Window};
pub use navigation::{NavigationOutcome, NavigationRequest, Proceed, Router, RouterBuilder, Trigger};
pub use outlet::{Document, RouterOutlet};
pub use routing::RouteInfo;
