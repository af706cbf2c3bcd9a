//! Navigation metrics.
//!
//! # Metrics
//! - `router_navigations_total` (counter): every handled trigger, by mode and outcome
//! - `router_not_found_total` (counter): commits that matched no route, by mode
//! - `router_guard_wait_seconds` (histogram): time spent waiting on the before-guard

use std::time::Instant;

use crate::location::Mode;

pub fn record_navigation(mode: Mode, outcome: &'static str) {
    ::metrics::counter!(
        "router_navigations_total",
        "mode" => mode.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_not_found(mode: Mode) {
    ::metrics::counter!("router_not_found_total", "mode" => mode.as_str()).increment(1);
}

pub fn record_guard_wait(started: Instant) {
    ::metrics::histogram!("router_guard_wait_seconds").record(started.elapsed().as_secs_f64());
}
