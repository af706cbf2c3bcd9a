//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! router.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterSettings (validated, immutable)
//!     → RouterBuilder (hooks attached in code)
//!     → Router
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; the route table never changes afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - An unknown `mode` is not a validation error: it falls back to hash with a warning

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, RouteConfig, RouterSettings};
pub use validation::{validate_settings, ValidationError};
