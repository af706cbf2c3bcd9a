//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router, hooks, config loader produce:
//!     → logging.rs (tracing subscriber, one span per navigation)
//!     → metrics.rs (counters and histograms via the `metrics` facade)
//! ```
//!
//! # Design Decisions
//! - Library code only emits; installing a subscriber or a metrics
//!   recorder is left to the binary or the embedding application
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
