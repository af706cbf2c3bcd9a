//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Window event (Trigger)
//!     → router.rs (mode dispatch, base admission, history push)
//!     → hooks.rs before-guard (waits for Proceed)
//!     → routing::RouteTable::resolve (index + params)
//!     → current route swapped
//!     → hooks.rs commit notifier (index) → after-notifier (to, from)
//! ```
//!
//! # Design Decisions
//! - The router is a cloneable handle over shared state, so the event loop
//!   can run every pipeline in its own task
//! - `push`/`push_by_name` only talk to the window; navigation always flows
//!   back through a trigger

pub mod api;
pub mod hooks;
pub mod router;
pub mod state;
pub mod trigger;

pub use hooks::{Hooks, Proceed};
pub use router::{NavigationOutcome, Router, RouterBuilder};
pub use state::{NavigationState, StateTracker};
pub use trigger::{HistoryState, NavigationRequest, Trigger};
