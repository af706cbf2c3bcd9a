//! Navigation state machine.
//!
//! # Responsibilities
//! - Own the single current route
//! - Turn each trigger into a candidate route via the location adapter
//! - Run the hook pipeline around the commit
//! - Resolve the committed route to a table index for the renderer
//!
//! # Design Decisions
//! - Every trigger starts an independent pipeline; nothing is cancelled
//! - The current route is swapped atomically; the last pipeline to get
//!   past its guard wins, regardless of which started first
//! - Params are attached before the route is published, so readers never
//!   observe a route whose match is still in flight
//! - No-match is a normal commit with index `None`

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tokio::sync::{broadcast, mpsc};
use tracing::Instrument;

use crate::config::{validate_settings, ConfigError, RouterSettings};
use crate::error::RouterError;
use crate::location::{BasePath, Location, LocationAdapter, Mode, Window};
use crate::navigation::hooks::{Hooks, Proceed};
use crate::navigation::state::{NavigationState, StateTracker};
use crate::navigation::trigger::{HistoryState, NavigationRequest, Trigger};
use crate::observability::metrics;
use crate::routing::{index_code, RouteInfo, RouteTable};

/// How a single trigger ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The route became current and the renderer was told `index`.
    Committed { index: Option<usize>, generation: u64 },
    /// History request outside the base; nothing changed.
    Rejected,
    /// Hash mode found no fragment and set it to `/`; that change navigates.
    Redirected,
    /// The before-guard dropped its handle; the navigation never commits.
    Abandoned { generation: u64 },
    /// The trigger means nothing in this router's mode.
    Ignored,
}

impl NavigationOutcome {
    /// Signed commit index (`-1` for no match), `None` if nothing committed.
    pub fn code(&self) -> Option<i64> {
        match self {
            NavigationOutcome::Committed { index, .. } => Some(index_code(*index)),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavigationOutcome::Committed { index: Some(_), .. } => "committed",
            NavigationOutcome::Committed { index: None, .. } => "not_found",
            NavigationOutcome::Rejected => "rejected",
            NavigationOutcome::Redirected => "redirected",
            NavigationOutcome::Abandoned { .. } => "abandoned",
            NavigationOutcome::Ignored => "ignored",
        }
    }
}

/// Builds a [`Router`] from settings plus hooks.
pub struct RouterBuilder {
    settings: RouterSettings,
    hooks: Hooks,
}

impl RouterBuilder {
    pub fn new(settings: RouterSettings) -> Self {
        Self {
            settings,
            hooks: Hooks::default(),
        }
    }

    /// Gate every navigation. The guard must eventually call `proceed`.
    pub fn before_each<F>(mut self, guard: F) -> Self
    where
        F: Fn(&RouteInfo, Option<&RouteInfo>, Proceed) + Send + Sync + 'static,
    {
        self.hooks.before_each = Some(Arc::new(guard));
        self
    }

    pub fn after_each<F>(mut self, notifier: F) -> Self
    where
        F: Fn(&RouteInfo, Option<&RouteInfo>) + Send + Sync + 'static,
    {
        self.hooks.after_each = Some(Arc::new(notifier));
        self
    }

    /// Receive the resolved table index on every commit.
    pub fn on_commit<F>(mut self, callback: F) -> Self
    where
        F: Fn(Option<usize>) + Send + Sync + 'static,
    {
        self.hooks.on_commit = Some(Arc::new(callback));
        self
    }

    pub fn build(self, window: Arc<Window>) -> Result<Router, RouterError> {
        validate_settings(&self.settings).map_err(ConfigError::Validation)?;

        let mode = Mode::resolve(self.settings.mode.as_deref());
        let base = BasePath::new(&self.settings.base);
        let table = RouteTable::from_config(&self.settings.routes);

        tracing::info!(
            mode = %mode,
            base = %base,
            routes = table.len(),
            "Router created"
        );

        Ok(Router {
            inner: Arc::new(RouterInner {
                mode,
                location: Location::new(mode, base.clone()),
                base,
                table,
                hooks: self.hooks,
                mount_target: self.settings.mount_target,
                window,
                current: ArcSwapOption::empty(),
                tracker: StateTracker::default(),
            }),
        })
    }
}

pub(crate) struct RouterInner {
    pub(crate) mode: Mode,
    pub(crate) base: BasePath,
    pub(crate) location: Location,
    pub(crate) table: RouteTable,
    pub(crate) hooks: Hooks,
    pub(crate) mount_target: String,
    pub(crate) window: Arc<Window>,
    current: ArcSwapOption<RouteInfo>,
    tracker: StateTracker,
}

/// A navigation engine bound to one window. Cheap to clone.
#[derive(Clone)]
pub struct Router {
    pub(crate) inner: Arc<RouterInner>,
}

impl Router {
    pub fn builder(settings: RouterSettings) -> RouterBuilder {
        RouterBuilder::new(settings)
    }

    pub fn mode(&self) -> Mode {
        self.inner.mode
    }

    pub fn base(&self) -> &BasePath {
        &self.inner.base
    }

    pub fn routes(&self) -> &RouteTable {
        &self.inner.table
    }

    pub fn location(&self) -> &Location {
        &self.inner.location
    }

    pub fn mount_target(&self) -> &str {
        &self.inner.mount_target
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.inner.window
    }

    pub fn current_route(&self) -> Option<Arc<RouteInfo>> {
        self.inner.current.load_full()
    }

    pub fn state(&self) -> NavigationState {
        let has_current = self.inner.current.load().is_some();
        self.inner.tracker.state(has_current)
    }

    /// Generation of the last navigation that committed, 0 if none.
    pub fn committed_generation(&self) -> u64 {
        self.inner.tracker.committed_generation()
    }

    /// Run one trigger through the full pipeline.
    pub async fn handle(&self, trigger: Trigger) -> NavigationOutcome {
        let outcome = match (self.inner.mode, trigger) {
            (Mode::Hash, Trigger::Mount | Trigger::HashChanged) => self.on_hash_change().await,
            (Mode::History, Trigger::Mount) => {
                let request = NavigationRequest::new(self.inner.window.path_and_query());
                self.on_history_request(&request, false).await
            }
            (Mode::History, Trigger::LinkClicked(request)) => {
                self.on_history_request(&request, false).await
            }
            (Mode::History, Trigger::PopState(Some(state))) => {
                self.on_history_request(&NavigationRequest::new(state.path), true)
                    .await
            }
            (mode, trigger) => {
                tracing::debug!(mode = %mode, trigger = trigger.kind(), "Trigger ignored");
                NavigationOutcome::Ignored
            }
        };

        metrics::record_navigation(self.inner.mode, outcome.label());
        outcome
    }

    /// Consume window events until shutdown, one spawned pipeline per trigger.
    pub async fn run(
        self,
        mut triggers: mpsc::UnboundedReceiver<Trigger>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        tracing::info!(mode = %self.inner.mode, "Router event loop starting");

        loop {
            tokio::select! {
                trigger = triggers.recv() => {
                    let Some(trigger) = trigger else {
                        tracing::debug!("Window event stream closed");
                        break;
                    };
                    let router = self.clone();
                    tokio::spawn(async move {
                        router.handle(trigger).await;
                    });
                }
                _ = shutdown.recv() => {
                    tracing::info!("Router received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    async fn on_hash_change(&self) -> NavigationOutcome {
        match self.inner.window.hash() {
            Some(fragment) => {
                // the adapter takes the fragment with its marker and strips one
                let candidate = self.inner.location.parse(&format!("#{fragment}"));
                self.navigate(candidate).await
            }
            None => {
                tracing::debug!("Address has no fragment, redirecting to /");
                self.inner.window.set_hash("/");
                NavigationOutcome::Redirected
            }
        }
    }

    async fn on_history_request(
        &self,
        request: &NavigationRequest,
        replay: bool,
    ) -> NavigationOutcome {
        let Location::History(history) = &self.inner.location else {
            return NavigationOutcome::Ignored;
        };

        let Some(admission) = history.admit(request, replay) else {
            tracing::debug!(
                path = %request.path,
                base = %history.base(),
                "Navigation outside base ignored"
            );
            return NavigationOutcome::Rejected;
        };

        if !replay {
            let state = HistoryState {
                path: admission.address.clone(),
            };
            self.inner.window.push_state(state, &admission.address);
        }

        self.navigate(RouteInfo::parse(&admission.path)).await
    }

    async fn navigate(&self, mut candidate: RouteInfo) -> NavigationOutcome {
        let inner = &self.inner;
        let generation = inner.tracker.begin();
        let span = tracing::info_span!(
            "navigation",
            generation,
            mode = %inner.mode,
            path = %candidate.full_path
        );

        async move {
            let from = inner.current.load_full();

            if !inner.hooks.before(&candidate, from.as_deref()).await {
                tracing::warn!("Before guard dropped its proceed handle; navigation stays pending");
                return NavigationOutcome::Abandoned { generation };
            }

            let index = match inner.table.resolve(&candidate) {
                Ok(matched) => {
                    candidate.params = matched.params;
                    Some(matched.index)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "No route matched");
                    metrics::record_not_found(inner.mode);
                    None
                }
            };

            let to = Arc::new(candidate);
            inner.current.store(Some(Arc::clone(&to)));
            inner.tracker.commit(generation);
            tracing::debug!(index = index_code(index), "Navigation committed");

            inner.hooks.commit(index);
            inner.hooks.after(&to, from.as_deref());

            NavigationOutcome::Committed { index, generation }
        }
        .instrument(span)
        .await
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("mode", &self.inner.mode)
            .field("base", &self.inner.base)
            .field("routes", &self.inner.table.len())
            .field("hooks", &self.inner.hooks)
            .field("state", &self.state())
            .finish()
    }
}
